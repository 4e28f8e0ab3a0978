//! End-to-end tests for a full quiz session against the built-in catalog
//! and a loaded mission pack.

use std::io::Write;

use htmlquest::runner::{IgnoreReason, MissionRunner, Submission};
use htmlquest::{Catalog, MissionId};

/// Submit a correct answer and redeem the advance ticket right away
fn solve(runner: &mut MissionRunner, answer: &str) {
    match runner.submit(answer) {
        Submission::Correct { advance, .. } => {
            runner.advance(advance);
        }
        other => panic!("expected {answer:?} to be correct, got {other:?}"),
    }
}

#[test]
fn first_mission_awards_quarter_progress_and_badge() {
    let mut runner = MissionRunner::new(Catalog::builtin());

    let outcome = runner.submit("<h1>El Planeta Digital</h1>");
    let Submission::Correct { badge, advance, .. } = outcome else {
        panic!("canonical answer rejected");
    };
    runner.advance(advance);

    assert_eq!(badge.label(), "🏆 Maestro de Títulos");
    assert_eq!(runner.progress().fraction(), 0.25);
    assert_eq!(runner.awarded_badges().len(), 1);
}

#[test]
fn empty_submission_leaves_progress_untouched() {
    let mut runner = MissionRunner::new(Catalog::builtin());

    let outcome = runner.submit("");
    assert!(matches!(outcome, Submission::Incorrect { .. }));
    assert_eq!(runner.progress().fraction(), 0.0);
    assert!(runner.awarded_badges().is_empty());
}

#[test]
fn full_playthrough_finishes_with_all_badges_in_order() {
    let mut runner = MissionRunner::new(Catalog::builtin());

    solve(&mut runner, "<h1>El Planeta Digital</h1>");
    solve(&mut runner, "<p>HTML es el esqueleto de la web</p>");
    solve(&mut runner, "<img src=\"imagen.png\">");
    solve(&mut runner, "<a href=\"#\">Ir a la Base de Datos</a>");

    assert!(runner.is_finished());
    assert!(runner.active_mission().is_none());
    assert_eq!(runner.progress().fraction(), 1.0);

    let labels: Vec<_> = runner
        .awarded_badges()
        .iter()
        .map(|a| a.badge.label().to_string())
        .collect();
    assert_eq!(
        labels,
        vec![
            "🏆 Maestro de Títulos",
            "✍️ Arquitecto Textual",
            "🖼️ Curador Visual",
            "🔗 Conector de Mundos",
        ]
    );
}

#[test]
fn image_mission_accepts_every_alternative() {
    let alternatives = [
        "<img src=\"imagen.png\">",
        "<img src=\"imagen.png\"/>",
        "<img src='imagen.png'>",
        "<img src=\"imagen.png\" alt=\"cohete\">",
        "<img alt=\"imagen\" src=\"imagen.png\">",
    ];

    for alternative in alternatives {
        let mut runner = MissionRunner::new(Catalog::builtin());
        solve(&mut runner, "<h1>El Planeta Digital</h1>");
        solve(&mut runner, "<p>HTML es el esqueleto de la web</p>");

        assert!(
            matches!(runner.submit(alternative), Submission::Correct { .. }),
            "alternative {alternative:?} was rejected"
        );
    }
}

#[test]
fn padded_answers_succeed_but_near_misses_fail() {
    let mut runner = MissionRunner::new(Catalog::builtin());
    solve(&mut runner, "  <h1>El Planeta Digital</h1>  \n");
    assert_eq!(runner.progress().completed, 1);

    // case, internal spacing: exact equality only
    let mut runner = MissionRunner::new(Catalog::builtin());
    for near_miss in [
        "<H1>El Planeta Digital</H1>",
        "<h1> El Planeta Digital </h1>",
        "<h1>el planeta digital</h1>",
    ] {
        assert!(
            matches!(runner.submit(near_miss), Submission::Incorrect { .. }),
            "near miss {near_miss:?} was accepted"
        );
    }
}

#[test]
fn rapid_resubmits_during_delay_window_change_nothing() {
    let mut runner = MissionRunner::new(Catalog::builtin());

    let Submission::Correct { advance, .. } = runner.submit("<h1>El Planeta Digital</h1>") else {
        panic!("canonical answer rejected");
    };

    assert!(matches!(
        runner.submit("<h1>El Planeta Digital</h1>"),
        Submission::Ignored(IgnoreReason::AdvancePending)
    ));
    assert!(matches!(
        runner.submit("<p>HTML es el esqueleto de la web</p>"),
        Submission::Ignored(IgnoreReason::AdvancePending)
    ));

    assert_eq!(runner.progress().completed, 1);
    assert_eq!(runner.awarded_badges().len(), 1);

    runner.advance(advance);
    assert_eq!(runner.active_mission().unwrap().id, MissionId(2));
}

#[test]
fn submissions_after_the_final_mission_are_ignored() {
    let mut runner = MissionRunner::new(Catalog::builtin());

    solve(&mut runner, "<h1>El Planeta Digital</h1>");
    solve(&mut runner, "<p>HTML es el esqueleto de la web</p>");
    solve(&mut runner, "<img src=\"imagen.png\">");
    solve(&mut runner, "<a href=\"#\">Ir a la Base de Datos</a>");

    assert!(matches!(
        runner.submit("<h1>El Planeta Digital</h1>"),
        Submission::Ignored(IgnoreReason::Finished)
    ));
    assert_eq!(runner.progress().completed, 4);
    assert_eq!(runner.awarded_badges().len(), 4);
}

#[test]
fn mission_pack_loads_and_plays() {
    let mut pack = tempfile::NamedTempFile::new().unwrap();
    write!(
        pack,
        r#"[
            {{
                "id": 1,
                "title": "Misión 1: La lista perdida",
                "description": "Los elementos de lista usan la etiqueta li.",
                "brokenCode": "... primer elemento ...",
                "correctAnswer": ["<li>primer elemento</li>", "<li >primer elemento</li>"],
                "badge": "📋 Maestro de Listas"
            }}
        ]"#
    )
    .unwrap();

    let catalog = Catalog::from_json_file(pack.path()).unwrap();
    let mut runner = MissionRunner::new(catalog);

    assert_eq!(runner.active_mission().unwrap().id, MissionId(1));
    solve(&mut runner, "<li >primer elemento</li>");

    assert!(runner.is_finished());
    assert_eq!(runner.awarded_badges()[0].badge.label(), "📋 Maestro de Listas");
}

#[test]
fn invalid_mission_pack_is_rejected() {
    let mut pack = tempfile::NamedTempFile::new().unwrap();
    write!(pack, "[]").unwrap();

    assert!(Catalog::from_json_file(pack.path()).is_err());
}
