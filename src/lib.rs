#![forbid(unsafe_code)]
//! Sked — planification hebdomadaire équitable d'une astreinte tournante.
//!
//! - Algèbre d'intervalles `[start, end)` et classification des chevauchements.
//! - Génération de créneaux hebdomadaires contigus, ancrés sur un jour de la semaine.
//! - Rotation par priorités, avec indisponibilités.
//! - Édition manuelle qui préserve un planning trié et sans chevauchement.
//! - Tout en UTC en interne ; les fuseaux n'interviennent qu'aux bords.

pub mod interval;
pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;
pub mod storage;
pub mod weekly;

pub use interval::{classify, overlaps, Interval, OverlapKind};
pub use model::{BuildOptions, Person, PersonId, Schedule, Shift, State};
pub use render::{CalendarRenderer, ScheduleRenderer, TextRenderer};
pub use scheduler::{
    assign_fair, build_schedule, BuildReport, Conflict, ConflictKind, SchedError, Scheduler,
};
pub use storage::{JsonStorage, Storage};
pub use weekly::{generate_weekly_shifts, last_weekday};
