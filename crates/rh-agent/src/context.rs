//! What a role is allowed to touch during its agent's turn.

use rh_core::{AgentId, HubId, SimRng, Tick};
use rh_grid::SpatialIndex;
use rh_hub::HubStore;

use crate::Participant;

/// Mutable view of every participant except the one whose turn it is.
///
/// Built with `split_at_mut` so the acting agent and its peers can be
/// borrowed mutably at the same time.  Writes through `Peers` land in the
/// shared agent list immediately; a partner stepping later in the same tick
/// sees them.
pub struct Peers<'a> {
    me:     AgentId,
    before: &'a mut [Participant],
    after:  &'a mut [Participant],
}

impl<'a> Peers<'a> {
    /// Split `all` into the participant `me` and everybody else.
    ///
    /// Returns `None` if `me` is out of range.  `all[i]` must hold the
    /// participant with `AgentId(i)`.
    pub fn split(all: &'a mut [Participant], me: AgentId) -> Option<(&'a mut Participant, Peers<'a>)> {
        if me.index() >= all.len() {
            return None;
        }
        let (before, rest) = all.split_at_mut(me.index());
        let (mine, after) = rest.split_first_mut()?;
        Some((mine, Peers { me, before, after }))
    }

    fn slot(&self, id: AgentId) -> Option<(bool, usize)> {
        match id.index().cmp(&self.me.index()) {
            std::cmp::Ordering::Less    => Some((true, id.index())),
            std::cmp::Ordering::Equal   => None,
            std::cmp::Ordering::Greater => Some((false, id.index() - self.me.index() - 1)),
        }
    }

    /// Peer `id`; `None` for the acting agent itself or unknown ids.
    pub fn get(&self, id: AgentId) -> Option<&Participant> {
        match self.slot(id)? {
            (true, i)  => self.before.get(i),
            (false, i) => self.after.get(i),
        }
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Participant> {
        match self.slot(id)? {
            (true, i)  => self.before.get_mut(i),
            (false, i) => self.after.get_mut(i),
        }
    }

    /// Number of peers.
    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything one agent's turn may read or mutate.
///
/// Assembled by the simulation driver for each activation and handed to
/// [`Participant::step`][crate::Participant::step].
pub struct BusinessContext<'a, G: SpatialIndex> {
    /// Agent whose turn it is.
    pub agent: AgentId,
    /// Hub assigned to that agent at creation, if any.
    pub hub:   Option<HubId>,
    pub tick:  Tick,
    pub grid:  &'a mut G,
    pub hubs:  &'a mut HubStore,
    pub peers: Peers<'a>,
    pub rng:   &'a mut SimRng,
}
