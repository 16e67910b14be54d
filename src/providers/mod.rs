pub mod email;
pub mod fs;
pub mod notifier;
pub mod oracle;
pub mod sources;
pub mod team_reader;
pub mod team_writer;
