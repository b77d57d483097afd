use super::*;

impl App {
    /// Where Enter should take the user, and which notification to mark read
    /// once it succeeds.
    fn resolve_jump_target(&self) -> Option<(JumpTarget, Option<u64>)> {
        if !self.is_grouped_view() {
            let n = self.selected_notification()?;
            let target = JumpTarget {
                session: n.session.clone(),
                window: n.window.clone(),
                pane: n.pane.clone(),
            };
            return Some((target, Some(n.id)));
        }

        let node = self.selected_node()?;
        let n = node.notification.as_ref().or(node.latest_event.as_ref())?;
        let mut target = JumpTarget {
            session: n.session.clone(),
            window: n.window.clone(),
            pane: n.pane.clone(),
        };
        if node.kind == NodeKind::Window {
            target.pane.clear();
        }
        Some((target, Some(n.id)))
    }

    pub(super) fn start_jump(&mut self) {
        if self.jump_in_flight {
            debug!("jump already in flight, ignoring");
            return;
        }
        let Some((target, notification_id)) = self.resolve_jump_target() else {
            return;
        };
        if target.session.is_empty() || target.window.is_empty() {
            self.push_error("jump: notification missing session or window information");
            return;
        }

        self.jump_in_flight = true;
        let generation = self.generation;
        let tmux = Arc::clone(&self.tmux);
        let tx = self.jobs_tx.clone();
        debug!(?target, generation, "starting jump");
        std::thread::spawn(move || {
            let res = tmux.ensure_running().and_then(|()| {
                if target.pane.is_empty() {
                    tmux.jump_to_window(&target.session, &target.window)
                } else {
                    tmux.jump_to_pane(&target.session, &target.window, &target.pane)
                }
            });
            let label = match res {
                Ok(()) => format!(
                    "{}:{}",
                    tmux.name(NameKind::Session, &target.session),
                    tmux.name(NameKind::Window, &target.window)
                ),
                Err(_) => format!("{}:{}", target.session, target.window),
            };
            let _ = tx.send(JobResult::Jump {
                generation,
                target,
                notification_id,
                label,
                outcome: res.map_err(|e| e.to_string()),
            });
        });
    }

    /// Applies finished background jobs. Called once per tick.
    pub(in crate::tui_shell) fn drain_jobs(&mut self) {
        while let Ok(job) = self.jobs_rx.try_recv() {
            self.apply_job(job);
        }
    }

    pub(super) fn apply_job(&mut self, job: JobResult) {
        match job {
            JobResult::Jump {
                generation,
                notification_id,
                label,
                outcome,
                ..
            } => {
                self.jump_in_flight = false;
                if let Err(err) = outcome {
                    self.push_error(format!("jump failed: {err}"));
                    return;
                }
                if generation != self.generation {
                    debug!(
                        generation,
                        current = self.generation,
                        "stale jump result, skipping follow-ups"
                    );
                    self.push_info(format!("Jumped to {label}"));
                    return;
                }
                if let Some(id) = notification_id {
                    if let Err(err) = self.store.mark_read(id) {
                        warn!(id, %err, "failed to mark jumped notification read");
                    }
                }
                self.quit_with_save();
            }
        }
    }
}
