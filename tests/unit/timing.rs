use super::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_owned()).collect()
}

fn style() -> WordStyle {
    WordStyle {
        color: Color::rgb(255, 255, 238),
        font_size: 100,
    }
}

fn windows(timeline: &[TimedWord]) -> Vec<(f64, f64)> {
    timeline.iter().map(|w| (w.start, w.end)).collect()
}

fn assert_contiguous(timeline: &[TimedWord], total: f64) {
    assert_eq!(timeline[0].start, 0.0);
    for pair in timeline.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "gap or overlap between windows");
    }
    for w in timeline {
        assert!(w.start < w.end, "empty window for {:?}", w.word);
    }
    let end = total_duration(timeline);
    assert!(
        (end - total).abs() <= total * 1e-12,
        "coverage ends at {end}, expected {total}"
    );
}

#[test]
fn two_words_at_300_wpm() {
    let timeline = build_timeline(
        &words(&["Hello", "World"]),
        &TimingOpts::from_wpm(300.0),
        &style(),
    )
    .unwrap();

    assert_eq!(windows(&timeline), vec![(0.0, 0.2), (0.2, 0.4)]);
    assert_eq!(timeline[0].word, "Hello");
    assert_eq!(timeline[1].color, style().color);
}

#[test]
fn override_duration_spreads_words_evenly() {
    let timing = TimingOpts {
        duration_override: Some(9.0),
        ..TimingOpts::from_wpm(300.0)
    };
    let timeline = build_timeline(&words(&["A", "B", "C"]), &timing, &style()).unwrap();

    assert_eq!(
        windows(&timeline),
        vec![(0.0, 3.0), (3.0, 6.0), (6.0, 9.0)]
    );
}

#[test]
fn windows_cover_the_wpm_duration_exactly_once() {
    for n in [1usize, 2, 3, 7, 10, 33, 250] {
        for wpm in [1.0, 60.0, 137.5, 300.0, 451.0, 1000.0] {
            let list: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
            let timeline = build_timeline(&list, &TimingOpts::from_wpm(wpm), &style()).unwrap();
            assert_eq!(timeline.len(), n);
            assert_contiguous(&timeline, n as f64 * 60.0 / wpm);
        }
    }
}

#[test]
fn windows_cover_the_override_exactly() {
    for n in [1usize, 3, 7, 100] {
        for d in [0.5, 1.0, 9.0, 10.0 / 3.0, 600.0] {
            let list: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
            let timing = TimingOpts {
                duration_override: Some(d),
                ..TimingOpts::from_wpm(300.0)
            };
            let timeline = build_timeline(&list, &timing, &style()).unwrap();
            assert_contiguous(&timeline, d);
            // The last window ends at the override itself, not at n * (d / n).
            assert_eq!(total_duration(&timeline), d);
            for w in &timeline {
                assert!((w.duration() - d / n as f64).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn empty_word_list_is_invalid_input() {
    let err = build_timeline(&[], &TimingOpts::from_wpm(300.0), &style()).unwrap_err();
    assert!(matches!(err, RsvpError::InvalidInput(_)));
}

#[test]
fn non_positive_rate_is_invalid_input() {
    for wpm in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err =
            build_timeline(&words(&["a"]), &TimingOpts::from_wpm(wpm), &style()).unwrap_err();
        assert!(matches!(err, RsvpError::InvalidInput(_)), "wpm {wpm}");
    }
}

#[test]
fn non_positive_override_is_invalid_input() {
    for d in [0.0, -3.0, f64::NAN] {
        let timing = TimingOpts {
            duration_override: Some(d),
            ..TimingOpts::from_wpm(300.0)
        };
        let err = build_timeline(&words(&["a"]), &timing, &style()).unwrap_err();
        assert!(matches!(err, RsvpError::InvalidInput(_)));
    }
}

#[test]
fn absurd_rates_are_rejected() {
    // 60 / 1e6 wpm is 60 microseconds per word.
    let err = build_timeline(&words(&["a", "b"]), &TimingOpts::from_wpm(1e6), &style())
        .unwrap_err();
    assert!(matches!(err, RsvpError::InvalidInput(_)));
}

#[test]
fn sentence_rests_extend_the_ending_word() {
    let timing = TimingOpts {
        rest_secs: 0.5,
        ..TimingOpts::from_wpm(60.0)
    };
    let list = words(&["One.", "Two.", "three", "four!"]);
    let timeline = build_timeline(&list, &timing, &style()).unwrap();

    // The first word never gets a rest.
    assert_eq!(
        windows(&timeline),
        vec![(0.0, 1.0), (1.0, 2.5), (2.5, 3.5), (3.5, 5.0)]
    );
    assert_contiguous(&timeline, 4.0 + 2.0 * 0.5);
}

#[test]
fn rests_come_out_of_the_override() {
    let timing = TimingOpts {
        wpm: 300.0,
        duration_override: Some(4.0),
        rest_secs: 1.0,
    };
    let timeline = build_timeline(&words(&["a", "b."]), &timing, &style()).unwrap();
    assert_eq!(windows(&timeline), vec![(0.0, 1.5), (1.5, 4.0)]);

    let starved = TimingOpts {
        duration_override: Some(1.0),
        ..timing
    };
    let err = build_timeline(&words(&["a", "b."]), &starved, &style()).unwrap_err();
    assert!(matches!(err, RsvpError::InvalidInput(_)));
}

#[test]
fn negative_rest_is_invalid_input() {
    let timing = TimingOpts {
        rest_secs: -0.1,
        ..TimingOpts::from_wpm(300.0)
    };
    assert!(matches!(
        build_timeline(&words(&["a"]), &timing, &style()),
        Err(RsvpError::InvalidInput(_))
    ));
}

#[test]
fn long_words_are_drawn_smaller() {
    let long = "x".repeat(LONG_WORD_CHARS + 1);
    let timeline = build_timeline(
        &[String::from("short"), long],
        &TimingOpts::from_wpm(300.0),
        &style(),
    )
    .unwrap();
    assert_eq!(timeline[0].size, 100);
    assert_eq!(timeline[1].size, 80);
}
