mod border;
mod canvas;
mod circle;
mod line;

pub use border::Border;
pub use canvas::Canvas;
pub use circle::Circle;
pub use line::DirectedLine;
