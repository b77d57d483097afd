use super::*;

fn def(name: &'static str, aliases: &'static [&'static str]) -> CommandDef {
    CommandDef {
        name,
        aliases,
        usage: "",
        help: "",
    }
}

#[test]
fn exact_beats_prefix_beats_substring() {
    assert_eq!(score_match("group-by", "group-by"), 100);
    assert_eq!(score_match("gro", "group-by"), 45);
    assert_eq!(score_match("by", "group-by"), 10);
    assert_eq!(score_match("zz", "group-by"), 0);
    assert_eq!(score_match("GROUP", "group-by"), 47);
}

#[test]
fn aliases_count_toward_the_score() {
    let d = def("expand-level", &["el"]);
    assert_eq!(score_command("el", &d), 100);
    assert_eq!(score_command("exp", &d), 50 - 9);
}

#[test]
fn ties_sort_by_name() {
    let mut scored = vec![(10, def("beta", &[])), (20, def("gamma", &[])), (10, def("alpha", &[]))];
    sort_scored_suggestions(&mut scored);
    let names: Vec<&str> = scored.iter().map(|(_, d)| d.name).collect();
    assert_eq!(names, ["gamma", "alpha", "beta"]);
}

#[test]
fn ranks_on_first_token_only() {
    let defs = [
        def("read-filter", &["rf"]),
        def("group-by", &[]),
        def("toggle-view", &[]),
    ];
    let ranked = rank_commands("gr unread", &defs);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].name, "group-by");

    let ranked = rank_commands("re", &defs);
    assert_eq!(ranked[0].name, "read-filter");

    assert_eq!(rank_commands("   ", &defs).len(), 3);
    assert!(rank_commands("xyz", &defs).is_empty());
}
