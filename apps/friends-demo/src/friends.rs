use flipview::{CloseHandle, Color, RowPage, RowPageBinder};

const SIENNA: Color = Color::from_rgb_u8(0xd6, 0x6a, 0x4f);
const SAFFRON: Color = Color::from_rgb_u8(0xf4, 0xc4, 0x30);
const GREEN: Color = Color::from_rgb_u8(0x61, 0xb9, 0x6d);
const PINK: Color = Color::from_rgb_u8(0xe9, 0x5c, 0x8c);
const ORANGE: Color = Color::from_rgb_u8(0xf2, 0x8d, 0x36);
const PURPLE: Color = Color::from_rgb_u8(0x8a, 0x5c, 0xc8);

#[derive(Clone, Debug)]
pub struct Friend {
    pub nickname: &'static str,
    pub background: Color,
    pub interests: [&'static str; 5],
}

impl Friend {
    const fn new(nickname: &'static str, background: Color, interests: [&'static str; 5]) -> Self {
        Self {
            nickname,
            background,
            interests,
        }
    }
}

pub fn friends() -> Vec<Friend> {
    vec![
        Friend::new(
            "ANASTASIA",
            SIENNA,
            ["Sport", "Literature", "Music", "Art", "Technology"],
        ),
        Friend::new(
            "IRENE",
            SAFFRON,
            ["Travelling", "Flights", "Books", "Painting", "Design"],
        ),
        Friend::new(
            "KATE",
            GREEN,
            ["Sales", "Pets", "Skiing", "Hairstyles", "Coffee"],
        ),
        Friend::new(
            "PAUL",
            PINK,
            ["Android", "Development", "Design", "Wearables", "Pets"],
        ),
        Friend::new(
            "DARIA",
            ORANGE,
            ["Design", "Fitness", "Healthcare", "UI/UX", "Chatting"],
        ),
        Friend::new(
            "KIRILL",
            SAFFRON,
            ["Development", "Android", "Healthcare", "Sport", "Rock Music"],
        ),
        Friend::new(
            "JULIA",
            GREEN,
            ["Cinema", "Music", "Tatoo", "Animals", "Management"],
        ),
        Friend::new(
            "YALANTIS",
            PURPLE,
            ["Android", "IOS", "Application", "Development", "Company"],
        ),
    ]
}

/// What one flip page shows.
#[derive(Clone, Debug)]
pub enum Card {
    Avatars {
        left: &'static str,
        right: Option<&'static str>,
    },
    Interests {
        nickname: &'static str,
        background: Color,
        lines: Vec<String>,
    },
}

impl Card {
    pub fn describe(&self) -> String {
        match self {
            Card::Avatars { left, right } => match right {
                Some(right) => format!("avatars [{left} | {right}]"),
                None => format!("avatars [{left}]"),
            },
            Card::Interests {
                nickname,
                background,
                lines,
            } => format!(
                "{nickname} on #{:02x}{:02x}{:02x}: {}",
                channel(background.r()),
                channel(background.g()),
                channel(background.b()),
                lines.join(", ")
            ),
        }
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Builds cards and remembers the close handle of the view last bound, so
/// the "back to avatars" action on an interests card can reach it.
#[derive(Default)]
pub struct FriendCards {
    pub built: usize,
    pub reused: usize,
    close: Option<CloseHandle>,
}

impl FriendCards {
    pub fn close_current(&self) -> bool {
        match &self.close {
            Some(close) => {
                close.close();
                true
            }
            None => false,
        }
    }
}

impl RowPageBinder<Friend> for FriendCards {
    type Content = Card;

    fn pages_per_row(&self) -> usize {
        3
    }

    fn bind_page(
        &mut self,
        page: usize,
        row_page: RowPage<'_, Friend>,
        close: &CloseHandle,
        reuse: Option<Card>,
    ) -> Card {
        if reuse.is_some() {
            self.reused += 1;
        } else {
            self.built += 1;
        }
        self.close = Some(close.clone());
        log::trace!("binding page {page}");

        match row_page {
            RowPage::Merged { first, second } => Card::Avatars {
                left: first.nickname,
                right: second.map(|friend| friend.nickname),
            },
            RowPage::Single { item } => {
                // Recycled interest cards keep their line buffer.
                let mut lines = match reuse {
                    Some(Card::Interests { lines, .. }) => lines,
                    _ => Vec::with_capacity(item.interests.len()),
                };
                lines.clear();
                lines.extend(item.interests.iter().map(|interest| interest.to_string()));
                Card::Interests {
                    nickname: item.nickname,
                    background: item.background,
                    lines,
                }
            }
        }
    }
}
