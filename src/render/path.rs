use std::fmt::Write as _;

use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Close,
}

/// Chainable builder for SVG path data, consumed by `Canvas::draw_path`.
///
/// Keeps its vertices addressable so the canvas can fold them into extent
/// tracking without re-parsing the emitted path string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathBuilder {
    commands: SmallVec<[PathCommand; 16]>,
}

impl PathBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    #[must_use]
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn to_path_data(&self) -> String {
        let mut data = String::new();
        for command in &self.commands {
            if !data.is_empty() {
                data.push(' ');
            }
            match command {
                PathCommand::MoveTo { x, y } => {
                    let _ = write!(data, "M {x} {y}");
                }
                PathCommand::LineTo { x, y } => {
                    let _ = write!(data, "L {x} {y}");
                }
                PathCommand::Close => data.push('Z'),
            }
        }
        data
    }

    pub(crate) fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => Some((*x, *y)),
            PathCommand::Close => None,
        })
    }
}
