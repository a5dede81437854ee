//! `rh-agent` — the participant state machine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`status`]      | `Status` lifecycle enum                                       |
//! | [`ledger`]      | `Ledger`, per-agent material accounting                       |
//! | [`role`]        | `ParticipantRole` trait, `Role` enum, `RoleKind`              |
//! | [`source`]      | `SourceRole`, demolition project business / wrap-up           |
//! | [`sink`]        | `SinkRole`, construction project business / wrap-up           |
//! | [`context`]     | `BusinessContext`, `Peers`, what a role may touch in its turn |
//! | [`participant`] | `Participant`, shared lifecycle driving a `Role`              |
//! | [`builder`]     | `ParticipantBuilder`                                          |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                                |
//!
//! # Lifecycle
//!
//! ```text
//!  passive ──current > EPS──▶ active ──balance < EPS──▶ finished
//!     │                         │
//!     └──── 2nd-to-last tick ───┴──▶ lifespan_alert ──▶ finished | incomplete
//! ```
//!
//! Every non-terminal tick first adds the flow-curve increment for the
//! agent's running time to `current_amount`, then runs the status handler.
//! Terminal agents only age.

pub mod builder;
pub mod context;
pub mod error;
pub mod ledger;
pub mod participant;
pub mod role;
pub mod sink;
pub mod source;
pub mod status;


pub use builder::ParticipantBuilder;
pub use context::{BusinessContext, Peers};
pub use error::{AgentError, AgentResult};
pub use ledger::Ledger;
pub use participant::Participant;
pub use role::{ParticipantRole, Role, RoleKind};
pub use sink::SinkRole;
pub use source::SourceRole;
pub use status::Status;
