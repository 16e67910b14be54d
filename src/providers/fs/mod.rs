pub mod path;
pub mod team_reader;
pub mod team_writer;
