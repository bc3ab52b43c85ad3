use taskboard_domain::{BoardOperations, FieldUpdate, SortMode, TaskDraft, TaskUpdate};
use taskboard_engine::BoardEngine;
use taskboard_persistence::JsonKvStore;

use crate::cli::{TaskAction, TaskAddArgs, TaskUpdateArgs};
use crate::output;

pub fn handle(engine: &mut BoardEngine<JsonKvStore>, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Add(args) => {
            let task = engine.add_task(draft_from(args))?;
            output::output_success(&task);
        }
        TaskAction::List { column, sort } => {
            let mode: SortMode = sort
                .parse()
                .map_err(|e: taskboard_core::TaskboardError| anyhow::anyhow!(e))?;
            let tasks = engine.tasks_in_column(&column, mode)?;
            output::output_list(tasks);
        }
        TaskAction::Get { id } => match engine.get_task(&id)? {
            Some(task) => output::output_success(&task),
            None => output::output_error(&format!("Task not found: {}", id)),
        },
        TaskAction::Update(args) => {
            let id = args.id.clone();
            match engine.update_task(&id, update_from(args))? {
                Some(task) => output::output_success(&task),
                None => output::output_error(&format!("Task not found: {}", id)),
            }
        }
        TaskAction::Delete { id } => {
            if engine.delete_task(&id)? {
                output::output_success(serde_json::json!({ "deleted": id }));
            } else {
                output::output_error(&format!("Task not found: {}", id));
            }
        }
        TaskAction::Move { id, column, index } => {
            match engine.move_task(&id, &column, index)? {
                Some(task) => output::output_success(&task),
                None => output::output_error(&format!(
                    "Cannot move task {}: task or column not found",
                    id
                )),
            }
        }
        TaskAction::Favorite { id } => match engine.toggle_favorite(&id)? {
            Some(task) => output::output_success(&task),
            None => output::output_error(&format!("Task not found: {}", id)),
        },
    }
    Ok(())
}

fn draft_from(args: TaskAddArgs) -> TaskDraft {
    TaskDraft {
        name: args.name,
        description: args.description,
        deadline: args.deadline,
        column_id: args.column,
        image_url: args.image_url,
        is_favorite: args.favorite,
    }
}

fn update_from(args: TaskUpdateArgs) -> TaskUpdate {
    let deadline = if args.clear_deadline {
        FieldUpdate::Clear
    } else {
        args.deadline.map(FieldUpdate::Set).unwrap_or_default()
    };
    let image_url = if args.clear_image_url {
        FieldUpdate::Clear
    } else {
        args.image_url.map(FieldUpdate::Set).unwrap_or_default()
    };
    TaskUpdate {
        name: args.name,
        description: args.description,
        deadline,
        column_id: args.column,
        image_url,
        is_favorite: args.favorite,
    }
}
