use std::{
    collections::{HashMap, VecDeque},
    time::{Duration, Instant},
};

use uuid::Uuid;

use crate::{
    db::MAX_REVIEWS,
    models::vote::{VoteChoice, VoteState},
};

/// Distinct records one session will track; a listing never shows more.
pub const MAX_SESSION_ENTRIES: usize = MAX_REVIEWS;
/// Longest record id accepted from a request path.
pub const MAX_RECORD_ID_LEN: usize = 64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CardState {
    expanded: bool,
    votes: VoteState,
}

/// Expand and vote state for a single view of the reviews page. Entries are
/// created on first interaction with a card.
#[derive(Debug, Clone)]
pub struct ListingSession {
    pub id: Uuid,
    created: Instant,
    cards: HashMap<String, CardState>,
}

impl Default for ListingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created: Instant::now(),
            cards: HashMap::new(),
        }
    }

    /// Cards interacted with so far.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_expanded(&self, record_id: &str) -> bool {
        self.cards.get(record_id).is_some_and(|c| c.expanded)
    }

    pub fn votes_for(&self, record_id: &str) -> VoteState {
        self.cards
            .get(record_id)
            .map(|c| c.votes.clone())
            .unwrap_or_default()
    }

    // None once the id is oversized or the session is full of other cards.
    fn card(&mut self, record_id: &str) -> Option<&mut CardState> {
        if record_id.is_empty() || record_id.len() > MAX_RECORD_ID_LEN {
            return None;
        }
        if !self.cards.contains_key(record_id) && self.cards.len() >= MAX_SESSION_ENTRIES {
            return None;
        }
        Some(self.cards.entry(record_id.to_string()).or_default())
    }

    pub fn toggle_expanded(&mut self, record_id: &str) -> Option<bool> {
        let card = self.card(record_id)?;
        card.expanded = !card.expanded;
        Some(card.expanded)
    }

    pub fn vote(&mut self, record_id: &str, choice: VoteChoice) -> Option<VoteState> {
        let card = self.card(record_id)?;
        card.votes.toggle(choice);
        Some(card.votes.clone())
    }
}

pub const DEFAULT_SESSION_CAPACITY: usize = 1_000;
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// In-memory registry of listing sessions. Sessions expire after `ttl`, and
/// the oldest one is dropped once `capacity` is reached.
#[derive(Debug)]
pub struct ListingSessions {
    sessions: HashMap<Uuid, ListingSession>,
    order: VecDeque<Uuid>,
    capacity: usize,
    ttl: Duration,
}

impl Default for ListingSessions {
    fn default() -> Self {
        Self::with_limits(DEFAULT_SESSION_CAPACITY, DEFAULT_SESSION_TTL)
    }
}

impl ListingSessions {
    pub fn with_limits(capacity: usize, ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
            ttl,
        }
    }

    fn is_live(&self, session: &ListingSession) -> bool {
        session.created.elapsed() < self.ttl
    }

    // Insertion order is also age order, so expired sessions sit at the front.
    fn prune(&mut self) {
        while let Some(oldest) = self.order.front() {
            let expired = self.sessions.get(oldest).is_none_or(|s| !self.is_live(s));
            if !expired && self.order.len() < self.capacity {
                break;
            }
            if let Some(oldest) = self.order.pop_front() {
                self.sessions.remove(&oldest);
            }
        }
    }

    pub fn insert(&mut self, session: ListingSession) -> Uuid {
        self.prune();
        let id = session.id;
        self.order.push_back(id);
        self.sessions.insert(id, session);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&ListingSession> {
        self.sessions.get(id).filter(|s| self.is_live(s))
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut ListingSession> {
        let ttl = self.ttl;
        self.sessions
            .get_mut(id)
            .filter(|s| s.created.elapsed() < ttl)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
