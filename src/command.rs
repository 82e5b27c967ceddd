//! Drawing commands passed from the input thread to the render thread.
//!
//! Every command is a small `Copy` value, so it can travel through the ring buffer as plain data.

/// Kind of shape to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Circle,
    Rectangle,
    Triangle,
}

/// Tag of a [`Command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    ClickAt,
    CreateShape,
    MoveShape,
    DeleteShape,
    Clear,
}

/// Place a new shape at the given point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CreateData {
    pub shape: Shape,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Move an existing shape to the given point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveData {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// Remove an existing shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoveData {
    pub id: u32,
}

/// Raw pointer click, to be resolved by the consumer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickData {
    pub x: f32,
    pub y: f32,
}

/// Command for the render thread.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    ClickAt(ClickData),
    CreateShape(CreateData),
    MoveShape(MoveData),
    DeleteShape(RemoveData),
    Clear,
}

impl Command {
    /// Default size of a shape created by click.
    pub const DEFAULT_SIZE: f32 = 50.0;

    /// Command that creates `shape` centered at `(x, y)` with the default size.
    pub fn create(shape: Shape, x: f32, y: f32) -> Self {
        Self::CreateShape(CreateData {
            shape,
            x,
            y,
            size: Self::DEFAULT_SIZE,
        })
    }

    /// Tag of the command.
    pub fn operation(&self) -> Operation {
        match self {
            Self::ClickAt(_) => Operation::ClickAt,
            Self::CreateShape(_) => Operation::CreateShape,
            Self::MoveShape(_) => Operation::MoveShape,
            Self::DeleteShape(_) => Operation::DeleteShape,
            Self::Clear => Operation::Clear,
        }
    }
}
