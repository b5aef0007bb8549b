use super::*;

/// Drive the machine one tick and return the outcome.
fn tick_n(state: &mut CarouselState, n: usize) -> Vec<Tick> {
    (0..n).map(|_| state.tick()).collect()
}

#[test]
fn test_full_schedule_finishes_on_last_tick() {
    // 3 张幻灯片 x 每张 10 秒：第 30 个 tick 才触发完成
    let mut state = CarouselState::new(3, 10);

    let outcomes = tick_n(&mut state, 29);
    assert!(
        !outcomes.contains(&Tick::Finished),
        "finish must not fire before the last slide's countdown ends"
    );

    assert_eq!(state.tick(), Tick::Finished);
}

#[test]
fn test_advance_schedule() {
    let mut state = CarouselState::new(3, 10);
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.seconds_remaining(), 10);

    // 第 10 个 tick 前进到第二张
    tick_n(&mut state, 9);
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.seconds_remaining(), 1);
    assert_eq!(state.tick(), Tick::Advanced);
    assert_eq!(state.current_index(), 1);
    assert_eq!(state.seconds_remaining(), 10);

    // 第 20 个 tick 前进到第三张
    tick_n(&mut state, 9);
    assert_eq!(state.tick(), Tick::Advanced);
    assert_eq!(state.current_index(), 2);
}

#[test]
fn test_index_stays_in_bounds_under_tick_storm() {
    let mut state = CarouselState::new(3, 10);
    let mut finishes = 0;

    for _ in 0..1000 {
        if state.tick() == Tick::Finished {
            finishes += 1;
        }
        assert!(state.current_index() < 3, "index escaped [0, N-1]");
    }

    // 完成信号恰好出现一次
    assert_eq!(finishes, 1);
}

#[test]
fn test_post_finish_ticks_are_inert() {
    let mut state = CarouselState::new(2, 3);
    while state.tick() != Tick::Finished {}

    let index = state.current_index();
    for _ in 0..10 {
        assert_eq!(state.tick(), Tick::Idle);
        assert_eq!(state.current_index(), index);
        assert_eq!(state.seconds_remaining(), 0);
    }
}

#[test]
fn test_single_slide_carousel() {
    let mut state = CarouselState::new(1, 5);
    let outcomes = tick_n(&mut state, 4);
    assert!(outcomes.iter().all(|t| *t == Tick::Counting));
    assert_eq!(state.tick(), Tick::Finished);
}

#[test]
#[should_panic]
fn test_zero_slides_rejected() {
    let _ = CarouselState::new(0, 10);
}
