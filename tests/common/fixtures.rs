//! Test data builders

use civicore::core::models::{
    Actor, Category, IssueDraft, Location, ReporterRef,
};

/// A well-formed road draft
pub fn pothole_draft() -> IssueDraft {
    IssueDraft {
        title: "Pothole".to_string(),
        description: "Deep pothole near the bus stop on the main road".to_string(),
        category: Category::Road,
        location: Location::from_address("Main St"),
        reporter: ReporterRef { user_id: 1 },
    }
}

/// Admin actor
pub fn admin() -> Actor {
    Actor::Admin { username: "root".to_string() }
}

/// Department actor for the given id
pub fn department(id: &str) -> Actor {
    Actor::Department { department_id: id.to_string() }
}
