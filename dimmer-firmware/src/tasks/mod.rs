// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels (Taster → Dimmer → Report).

pub mod button;
pub mod dimmer;
pub mod report;

// Re-export Tasks für einfachen Import
pub use button::button_task;
pub use dimmer::dimmer_task;
pub use report::state_report_task;
