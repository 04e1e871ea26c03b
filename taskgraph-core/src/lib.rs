pub mod cypher;
mod types;

pub use types::{Model, Person, Task, to_map_list};
