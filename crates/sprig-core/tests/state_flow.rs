use chrono_tz::Asia;
use sprig_core::datetime::{format_wire, local_input_to_utc, parse_wire, utc_to_local_input};
use sprig_core::state::{AppAction, AppState, LoadPhase};
use sprig_core::view::partition_by_status;
use sprig_shared::{CategoryDto, TodoDto};

fn sample_todos() -> Vec<TodoDto> {
    let first = TodoDto {
        id: "1".to_string(),
        title: "Write report".to_string(),
        category: "1".to_string(),
        description: "quarterly numbers".to_string(),
        completed: false,
        created_at: "2026-08-01T09:30:00Z".to_string(),
        due_date: "2025-03-27T00:00:00Z".to_string(),
        status: "in-progress".to_string(),
    };
    let mut second = first.clone();
    second.id = "2".to_string();
    second.title = "Buy groceries".to_string();
    second.status = "waiting".to_string();
    vec![first, second]
}

#[test]
fn full_session_flow() {
    let mut state = AppState::new();

    // Initial load: both lists land in either order.
    state.apply(AppAction::CategoriesLoaded(vec![CategoryDto {
        id: "1".to_string(),
        name: "Work".to_string(),
        color: "#FF4444".to_string(),
    }]));
    state.apply(AppAction::TodosLoaded(sample_todos()));
    assert_eq!(state.todos_phase, LoadPhase::Loaded);
    assert_eq!(state.categories_phase, LoadPhase::Loaded);

    // Create: the server echo carries the authoritative id.
    let mut created = sample_todos()[0].clone();
    created.id = "20260830120000".to_string();
    created.title = "Call the bank".to_string();
    state.apply(AppAction::Created(created));
    assert_eq!(state.todos.len(), 3);
    assert_eq!(state.todos[2].id, "20260830120000");

    // Edit round trip: prefill the due date in a UTC+9 viewer's
    // local format, resubmit it unedited, and the instant holds.
    let target = state.find_todo("1").expect("todo present").clone();
    let stored = parse_wire(&target.due_date).expect("stored due date parses");
    let prefill = utc_to_local_input(stored, Asia::Tokyo);
    assert_eq!(prefill, "2025-03-27T09:00");

    let mut edited = target.clone();
    let resubmitted = local_input_to_utc(&prefill, Asia::Tokyo).expect("resubmit parses");
    edited.due_date = format_wire(resubmitted);
    state.apply(AppAction::Updated(edited));
    assert_eq!(
        state.find_todo("1").expect("todo present").due_date,
        "2025-03-27T00:00:00Z"
    );

    // Toggle completion twice through full-object replace.
    let mut flipped = state.find_todo("2").expect("todo present").clone();
    flipped.completed = !flipped.completed;
    state.apply(AppAction::Updated(flipped.clone()));
    flipped.completed = !flipped.completed;
    state.apply(AppAction::Updated(flipped.clone()));
    assert_eq!(state.find_todo("2").expect("todo present"), &flipped);

    // Kanban partition sees only recognized statuses.
    let columns = partition_by_status(&state.todos);
    assert_eq!(columns.in_progress.len(), 2);
    assert_eq!(columns.waiting.len(), 1);
    assert!(columns.done.is_empty());

    // Delete removes exactly the matching entry.
    state.apply(AppAction::Removed("1".to_string()));
    assert_eq!(state.todos.len(), 2);
    assert!(state.find_todo("1").is_none());
    assert!(state.find_todo("2").is_some());
}
