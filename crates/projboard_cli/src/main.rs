//! Composition-root smoke entry point.
//!
//! # Responsibility
//! - Own the single per-process `ProjectStore` and wire console views to it.
//! - Run a deterministic create/move round for quick local sanity checks.

use projboard_core::{
    default_log_level, init_logging, mount, validate, FieldConstraints, FieldValue, Project,
    ProjectId, ProjectStatus, ProjectStore, View,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Console rendering of one status lane.
struct ConsoleLaneView {
    lane: ProjectStatus,
}

impl ConsoleLaneView {
    fn new(lane: ProjectStatus) -> Self {
        Self { lane }
    }
}

impl View for ConsoleLaneView {
    fn configure(&mut self) {
        println!("== {} projects ==", self.lane);
    }

    fn render(&mut self, projects: &[Project]) {
        let members: Vec<&Project> = projects
            .iter()
            .filter(|project| project.status == self.lane)
            .collect();
        println!("[{}] {} project(s)", self.lane, members.len());
        for project in members {
            println!("  - {} ({} people)", project.title, project.people);
        }
    }
}

/// Validates one form submission and stores it on success.
///
/// Field policy mirrors the input form: title required, description required
/// with minimum length 5, people within [1, 5].
fn submit(
    store: &mut ProjectStore,
    title: &str,
    description: &str,
    people: u32,
) -> Option<ProjectId> {
    let title_ok = validate(
        &FieldValue::Text(title),
        &FieldConstraints {
            required: true,
            ..FieldConstraints::default()
        },
    );
    let description_ok = validate(
        &FieldValue::Text(description),
        &FieldConstraints {
            required: true,
            min_length: Some(5),
            ..FieldConstraints::default()
        },
    );
    let people_ok = validate(
        &FieldValue::Count(i64::from(people)),
        &FieldConstraints {
            required: true,
            min: Some(1),
            max: Some(5),
            ..FieldConstraints::default()
        },
    );

    if !(title_ok && description_ok && people_ok) {
        println!("rejected submission: invalid input, please try again");
        return None;
    }

    match store.create(title, description, people) {
        Ok(id) => Some(id),
        Err(err) => {
            println!("rejected submission: {err}");
            None
        }
    }
}

fn main() {
    if let Err(err) = init_logging(
        default_log_level(),
        std::env::temp_dir().join("projboard-logs").to_string_lossy().as_ref(),
    ) {
        eprintln!("logging disabled: {err}");
    }

    let mut store = ProjectStore::new();

    let active_lane = Rc::new(RefCell::new(ConsoleLaneView::new(ProjectStatus::Active)));
    let finished_lane = Rc::new(RefCell::new(ConsoleLaneView::new(ProjectStatus::Finished)));
    mount(&mut store, &active_lane);
    mount(&mut store, &finished_lane);

    let first = submit(&mut store, "Build site", "Tutorial project", 3);
    submit(&mut store, "Write spec", "Docs task", 1);
    // Over-staffed submission never reaches the store.
    submit(&mut store, "Refactor", "Clean up the rendering layer", 9);

    // A drop event hands the target lane over as its string id.
    if let (Some(id), Some(target)) = (first, ProjectStatus::parse("finished")) {
        store.move_project(id, target);
    }

    println!(
        "final board: {} project(s), core {}",
        store.len(),
        projboard_core::core_version()
    );
}
