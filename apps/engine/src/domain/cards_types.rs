//! Core card-related types: Card, Rank, Suit

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

/// Ranks of the 40-card deck. There are no 8, 9 or 10 ranks; Q, J, K follow 7.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Queen,
    Jack,
    King,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
    ];

    /// Capture value: A=1 .. 7=7, Q=8, J=9, K=10.
    pub const fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Queen => 8,
            Rank::Jack => 9,
            Rank::King => 10,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// 7 of diamonds. Capturing it scores a point; sweeping with it is a haya.
    pub const HAYA: Card = Card {
        suit: Suit::Diamonds,
        rank: Rank::Seven,
    };

    /// 7 of clubs.
    pub const DINARI: Card = Card {
        suit: Suit::Clubs,
        rank: Rank::Seven,
    };

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub const fn value(self) -> u8 {
        self.rank.value()
    }
}

// Note: Ord on Card is only for stable sorting: suit order H<D<C<S then rank order.
// Capture legality only ever looks at `value()`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sum of capture values.
pub fn value_sum(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.value())).sum()
}
