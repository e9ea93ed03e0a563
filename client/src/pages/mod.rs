//! The single routed page. `home` starts both document reads on hydration and
//! lays out the sections.

pub mod home;
