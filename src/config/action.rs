use serde::Serialize;

use crate::config::{ActionConfig, Config, HotKeyConfig};
use crate::expression::bytecode::Code;
use crate::expression::vm::{Environment, evaluate};
use crate::foundation::core::{Point, Size};
use crate::foundation::error::ScriptResult;

#[derive(Clone, Debug, PartialEq)]
pub struct MoveCode {
    pub x: Code,
    pub y: Code,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResizeCode {
    pub width: Code,
    pub height: Code,
}

/// A configured action with every expression compiled once, ready to run on each key press.
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    pub hot_key: HotKeyConfig,
    pub move_code: Option<MoveCode>,
    pub resize_code: Option<ResizeCode>,
}

/// Where the focused window should go. `None` fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Placement {
    pub origin: Option<Point>,
    pub size: Option<Size>,
}

impl Action {
    /// Compile the action at `index` in its configuration.
    pub fn compile(index: usize, config: &ActionConfig) -> ScriptResult<Self> {
        let compile_field = |source: &str, field: &'static str| {
            Code::compile(source).map_err(|e| e.in_action(index, field))
        };

        let move_code = match &config.move_to {
            Some(m) => Some(MoveCode {
                x: compile_field(&m.x, "move.x")?,
                y: compile_field(&m.y, "move.y")?,
            }),
            None => None,
        };
        let resize_code = match &config.resize {
            Some(r) => Some(ResizeCode {
                width: compile_field(&r.width, "resize.width")?,
                height: compile_field(&r.height, "resize.height")?,
            }),
            None => None,
        };

        Ok(Self {
            hot_key: config.hot_key.clone(),
            move_code,
            resize_code,
        })
    }

    /// Run the action's code against `environment`.
    ///
    /// An origin (or size) is produced only when both of its coordinates yield a value; the
    /// second coordinate is not evaluated when the first yields nothing.
    pub fn placement<E>(&self, environment: &E) -> ScriptResult<Placement>
    where
        E: Environment + ?Sized,
    {
        let origin = match &self.move_code {
            Some(m) => run_pair(&m.x, &m.y, environment)?.map(|(x, y)| Point { x, y }),
            None => None,
        };
        let size = match &self.resize_code {
            Some(r) => run_pair(&r.width, &r.height, environment)?
                .map(|(width, height)| Size { width, height }),
            None => None,
        };
        Ok(Placement { origin, size })
    }
}

fn run_pair<E>(first: &Code, second: &Code, environment: &E) -> ScriptResult<Option<(f64, f64)>>
where
    E: Environment + ?Sized,
{
    let Some(a) = evaluate(first.operations(), environment)? else {
        return Ok(None);
    };
    let Some(b) = evaluate(second.operations(), environment)? else {
        return Ok(None);
    };
    Ok(Some((a, b)))
}

/// Compile every action in `config`, failing on the first invalid expression.
#[tracing::instrument(skip(config), fields(actions = config.actions.len()))]
pub fn compile_actions(config: &Config) -> ScriptResult<Vec<Action>> {
    config
        .actions
        .iter()
        .enumerate()
        .map(|(index, action)| Action::compile(index, action))
        .collect::<ScriptResult<Vec<_>>>()
        .inspect_err(|e| tracing::warn!(error = %e, "configuration rejected"))
}

#[cfg(test)]
#[path = "../../tests/unit/config/action.rs"]
mod tests;
