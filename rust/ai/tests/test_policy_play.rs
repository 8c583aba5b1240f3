use drawpoker_ai::create_policy;
use drawpoker_engine::session::{Session, SessionConfig};

#[test]
fn baseline_returns_more_than_drawing_five() {
    let play = |name: &str| {
        let policy = create_policy(name).unwrap();
        let mut session = Session::from_seed(
            SessionConfig {
                credits: 1_000_000,
                bet: 1,
            },
            2024,
        );
        for _ in 0..5_000 {
            let hand = session.deal().unwrap().hand.unwrap();
            for i in policy.choose_holds(&hand).indices() {
                session.toggle_hold(i).unwrap();
            }
            session.draw().unwrap();
        }
        session.stats().rtp()
    };
    assert!(play("baseline") > play("hold_none"));
}

#[test]
fn held_slots_survive_the_draw() {
    let policy = create_policy("baseline").unwrap();
    let mut session = Session::with_config(SessionConfig::default(), rand::rng());
    for _ in 0..50 {
        let hand = session.deal().unwrap().hand.unwrap();
        let holds = policy.choose_holds(&hand);
        for i in holds.indices() {
            session.toggle_hold(i).unwrap();
        }
        let out = session.draw().unwrap();
        for i in holds.indices() {
            assert_eq!(out.final_hand[i], hand[i]);
        }
        if !session.can_deal() {
            break;
        }
    }
}
