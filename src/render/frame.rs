use crate::core::Point;
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, DrawingSurface, LinePrimitive, TextAnchor, TextOutline, TextPrimitive,
};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line(LinePrimitive),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
}

/// Backend-agnostic recording of one chart draw pass.
///
/// Commands keep call order, so replaying a frame paints series in the same
/// depth order the chart issued them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        for command in &self.commands {
            match command {
                DrawCommand::Line(line) => line.validate()?,
                DrawCommand::Circle(circle) => circle.validate()?,
                DrawCommand::Text(text) => text.validate()?,
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Re-issues every recorded call on `surface`, in order.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Line(line) => {
                    surface.draw_line(line.from, line.to, line.color, line.thickness);
                }
                DrawCommand::Circle(circle) => {
                    surface.draw_circle(circle.center, circle.radius, circle.color, circle.segments);
                }
                DrawCommand::Text(text) => match text.outline {
                    Some(outline) => surface.draw_outlined_text(
                        &text.text,
                        text.position,
                        text.anchor,
                        text.scale,
                        text.color,
                        outline,
                    ),
                    None => surface.draw_text(
                        &text.text,
                        text.position,
                        text.anchor,
                        text.scale,
                        text.color,
                    ),
                },
            }
        }
    }
}

impl DrawingSurface for RenderFrame {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: f64) {
        self.commands
            .push(DrawCommand::Line(LinePrimitive::new(from, to, thickness, color)));
    }

    fn draw_circle(&mut self, center: Point, radius: f64, color: Color, segments: u32) {
        self.commands.push(DrawCommand::Circle(CirclePrimitive::new(
            center, radius, color, segments,
        )));
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        anchor: TextAnchor,
        scale: f64,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Text(TextPrimitive::new(
            text, position, anchor, scale, color,
        )));
    }

    fn draw_outlined_text(
        &mut self,
        text: &str,
        position: Point,
        anchor: TextAnchor,
        scale: f64,
        color: Color,
        outline: TextOutline,
    ) {
        self.commands.push(DrawCommand::Text(
            TextPrimitive::new(text, position, anchor, scale, color).with_outline(outline),
        ));
    }
}
