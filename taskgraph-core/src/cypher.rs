//! Parameterized Cypher statements, one per graph operation.
//!
//! Columns returned by the read statements are aliased to the field names of
//! [crate::Person] and [crate::Task], so rows decode by name.

pub const CREATE_PERSON: &str = "CREATE (p:Person {name: $name}) RETURN p";

pub const LIST_PERSONS: &str = "MATCH (p:Person) RETURN p.name AS name";

pub const UPDATE_PERSON: &str = "
    MATCH (p:Person {name: $old_name})
    SET p.name = $new_name
    RETURN p";

pub const DELETE_PERSON: &str = "MATCH (p:Person {name: $name}) DETACH DELETE p";

pub const CREATE_TASK: &str =
    "CREATE (t:Task {title: $title, description: $description}) RETURN t";

pub const LIST_TASKS: &str =
    "MATCH (t:Task) RETURN t.title AS title, t.description AS description";

pub const UPDATE_TASK: &str = "
    MATCH (t:Task {title: $old_title})
    SET t.title = $new_title, t.description = $new_description
    RETURN t";

pub const DELETE_TASK: &str = "MATCH (t:Task {title: $title}) DETACH DELETE t";

// MERGE keeps the edge unique per (person, task) pair.
pub const ASSIGN: &str = "
    MATCH (p:Person {name: $name}), (t:Task {title: $title})
    MERGE (p)-[:ASSIGNED_TO]->(t)
    RETURN p, t";

pub const TASKS_FOR_PERSON: &str = "
    MATCH (p:Person {name: $name})-[:ASSIGNED_TO]->(t:Task)
    RETURN t.title AS title, t.description AS description";

pub const PERSONS_FOR_TASK: &str = "
    MATCH (t:Task {title: $title})<-[:ASSIGNED_TO]-(p:Person)
    RETURN p.name AS name";

pub const ASSIGNED_TASKS: &str = "
    MATCH (:Person)-[:ASSIGNED_TO]->(t:Task {title: $title})
    RETURN DISTINCT t.title AS title, t.description AS description";

pub const ASSIGNED_PERSONS: &str = "
    MATCH (p:Person {name: $name})-[:ASSIGNED_TO]->(:Task)
    RETURN DISTINCT p.name AS name";

pub const UNIQUE_PERSON_NAME: &str =
    "CREATE CONSTRAINT person_name IF NOT EXISTS FOR (p:Person) REQUIRE p.name IS UNIQUE";

pub const UNIQUE_TASK_TITLE: &str =
    "CREATE CONSTRAINT task_title IF NOT EXISTS FOR (t:Task) REQUIRE t.title IS UNIQUE";

pub mod param {
    pub const NAME: &str = "name";
    pub const OLD_NAME: &str = "old_name";
    pub const NEW_NAME: &str = "new_name";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const OLD_TITLE: &str = "old_title";
    pub const NEW_TITLE: &str = "new_title";
    pub const NEW_DESCRIPTION: &str = "new_description";
}
