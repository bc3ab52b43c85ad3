use taskboard_domain::BoardOperations;
use taskboard_engine::BoardEngine;
use taskboard_persistence::JsonKvStore;

use crate::cli::ColumnAction;
use crate::output;

pub fn handle(engine: &mut BoardEngine<JsonKvStore>, action: ColumnAction) -> anyhow::Result<()> {
    match action {
        ColumnAction::Add { name } => {
            let column = engine.add_column(name)?;
            output::output_success(&column);
        }
        ColumnAction::List => {
            let columns = engine.columns()?;
            output::output_list(columns);
        }
        ColumnAction::Rename { id, name } => match engine.rename_column(&id, name)? {
            Some(column) => output::output_success(&column),
            None => output::output_error(&format!("Column not found: {}", id)),
        },
        ColumnAction::Delete { id } => {
            if engine.delete_column(&id)? {
                output::output_success(serde_json::json!({ "deleted": id }));
            } else {
                output::output_error(&format!("Column not found: {}", id));
            }
        }
    }
    Ok(())
}
