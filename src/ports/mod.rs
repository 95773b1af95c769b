/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the outside world (console, file
/// system, output encodings) through the outbound ports defined here.
pub mod outbound;
