//! Binding a scrolling list of item pairs, persisting page state across
//! recycled flip views.

use flipview::*;
use flipview_testing::{pump_until_settled, RecordingCanvas, TouchRobot};

#[derive(Clone, Debug, PartialEq)]
struct Friend {
    nickname: &'static str,
    interests: [&'static str; 2],
}

#[derive(Clone, Debug, PartialEq)]
enum Card {
    Avatars { left: String, right: Option<String> },
    Info { nickname: String, interests: String },
}

#[derive(Default)]
struct FriendCards {
    rebuilt: usize,
}

impl RowPageBinder<Friend> for FriendCards {
    type Content = Card;

    fn pages_per_row(&self) -> usize {
        3
    }

    fn bind_page(
        &mut self,
        _page: usize,
        row_page: RowPage<'_, Friend>,
        _close: &CloseHandle,
        reuse: Option<Card>,
    ) -> Card {
        if reuse.is_some() {
            self.rebuilt += 1;
        }
        match row_page {
            RowPage::Merged { first, second } => Card::Avatars {
                left: first.nickname.to_string(),
                right: second.map(|friend| friend.nickname.to_string()),
            },
            RowPage::Single { item } => Card::Info {
                nickname: item.nickname.to_string(),
                interests: item.interests.join(", "),
            },
        }
    }
}

fn friends() -> Vec<Friend> {
    vec![
        Friend {
            nickname: "ANASTASIA",
            interests: ["Sport", "Literature"],
        },
        Friend {
            nickname: "IRENE",
            interests: ["Travelling", "Flights"],
        },
        Friend {
            nickname: "KATE",
            interests: ["Sales", "Pets"],
        },
    ]
}

fn view() -> FlipViewPager<Card> {
    let mut pager = FlipViewPager::new(FlipSettings::default());
    pager.set_size(Size::new(400.0, 200.0));
    pager
}

#[test]
fn rows_open_on_the_merge_page() {
    let adapter = FlipListAdapter::new(friends(), FriendCards::default(), FlipSettings::default());
    assert_eq!(adapter.row_count(), 2);

    let mut pager = view();
    let mut canvas = RecordingCanvas::new();
    adapter.bind_row(1, &mut pager).expect("row 1 exists");
    pump_until_settled(&mut pager, &mut canvas, 0);

    assert_eq!(pager.page_count(), 2);
    assert_eq!(
        canvas.drawn(),
        vec![&Card::Avatars {
            left: "KATE".into(),
            right: None,
        }]
    );
}

#[test]
fn swiping_to_a_detail_page_survives_recycling_and_restarts() {
    let adapter = FlipListAdapter::new(friends(), FriendCards::default(), FlipSettings::default());
    let mut pager = view();
    let mut canvas = RecordingCanvas::new();
    adapter.bind_row(0, &mut pager).expect("row 0 exists");
    let bind = pump_until_settled(&mut pager, &mut canvas, 0);

    // Swipe right: back from the merge page to the first friend's details.
    let mut robot = TouchRobot::new();
    robot.swipe(&mut pager, 100.0, 220.0, 100.0, 6);
    pump_until_settled(&mut pager, &mut canvas, bind.next_frame_nanos);
    assert_eq!(pager.current_page(), Some(0));
    assert_eq!(
        pager.content(0),
        Some(&Card::Info {
            nickname: "ANASTASIA".into(),
            interests: "Sport, Literature".into(),
        })
    );

    // The view scrolls away and comes back bound to row 1, then row 0.
    adapter.bind_row(1, &mut pager).expect("row 1 exists");
    pump_until_settled(&mut pager, &mut canvas, 0);
    assert_eq!(pager.current_page(), Some(1));

    adapter.bind_row(0, &mut pager).expect("row 0 exists");
    pump_until_settled(&mut pager, &mut canvas, 0);
    assert_eq!(pager.current_page(), Some(0));

    // Persist and restore the store as a host would across launches.
    let json = adapter
        .page_states()
        .borrow()
        .to_json()
        .expect("page state serializes");
    let restored = RowPageStates::from_json(&json).expect("page state parses");
    assert_eq!(restored.peek(0), Some(0));
    assert_eq!(restored.peek(1), Some(1));

    let shared = std::rc::Rc::new(std::cell::RefCell::new(restored));
    let relaunched = FlipListAdapter::with_page_states(
        friends(),
        FriendCards::default(),
        FlipSettings::default(),
        shared,
    );
    let mut fresh = view();
    relaunched.bind_row(0, &mut fresh).expect("row 0 exists");
    pump_until_settled(&mut fresh, &mut canvas, 0);
    assert_eq!(fresh.current_page(), Some(0));
}

#[test]
fn added_items_fill_the_trailing_row() {
    let mut adapter =
        FlipListAdapter::new(friends(), FriendCards::default(), FlipSettings::default());
    adapter.push_item(Friend {
        nickname: "PAUL",
        interests: ["Android", "Development"],
    });
    assert_eq!(adapter.row_count(), 2);

    let mut pager = view();
    adapter.bind_row(1, &mut pager).expect("row 1 exists");
    pump_until_settled(&mut pager, &mut RecordingCanvas::new(), 0);
    assert_eq!(pager.page_count(), 3);
    assert_eq!(
        pager.content(1),
        Some(&Card::Avatars {
            left: "KATE".into(),
            right: Some("PAUL".into()),
        })
    );
}

#[test]
fn page_states_reject_garbage() {
    assert!(matches!(
        RowPageStates::from_json("{not json"),
        Err(FlipError::PageState(_))
    ));
}
