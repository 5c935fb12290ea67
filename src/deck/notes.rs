//! Static speaker notes, one block per slide kind.

use super::slide::SlideKind;

/// Presenter guidance attached to every slide of the given kind.
pub fn speaker_notes(kind: SlideKind) -> &'static str {
    match kind {
        SlideKind::Cover => concat!(
            "TIMING: 30 seconds\n",
            "SAY: State your one-line value prop\n",
            "TRANSITION: \"Here's what we'll cover...\""
        ),
        SlideKind::Agenda => concat!(
            "TIMING: 15 seconds\n",
            "SAY: Set expectations for the next few minutes\n",
            "TRANSITION: \"Here's the problem we're solving...\""
        ),
        SlideKind::Problem => concat!(
            "TIMING: 45 seconds\n",
            "SAY: Make them feel the pain\n",
            "TRANSITION: \"Here's the scale...\""
        ),
        SlideKind::Scale => concat!(
            "TIMING: 30 seconds\n",
            "SAY: Show the magnitude of the problem or your solution\n",
            "TRANSITION: \"Here's how it works...\""
        ),
        SlideKind::Solution => concat!(
            "TIMING: 45 seconds\n",
            "SAY: High-level architecture - don't go too deep\n",
            "SHOW: Point to each stage\n",
            "TRANSITION: \"Let me show you this working...\""
        ),
        SlideKind::Demo => concat!(
            "TIMING: 2 minutes\n",
            "SAY: \"Watch what happens when...\"\n",
            "SHOW: Run your live demo or show screenshot\n",
            "TRANSITION: \"Here's the proof it works...\""
        ),
        SlideKind::Results => concat!(
            "TIMING: 30 seconds\n",
            "SAY: Back up your claims with numbers\n",
            "TRANSITION: \"Here's the roadmap...\""
        ),
        SlideKind::Roadmap => concat!(
            "TIMING: 30 seconds\n",
            "SAY: Be honest about gaps - it builds trust\n",
            "TRANSITION: \"Here's my ask...\""
        ),
        SlideKind::Ask => concat!(
            "TIMING: 30 seconds\n",
            "SAY: Be specific about what you need\n",
            "TRANSITION: \"Thank you...\""
        ),
        SlideKind::Closing => concat!(
            "TIMING: Remaining time\n",
            "ASK: Open it up for questions\n",
            "END: Thank them for their time"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_timing() {
        for kind in SlideKind::ALL {
            assert!(speaker_notes(kind).starts_with("TIMING: "), "{:?}", kind);
        }
    }
}
