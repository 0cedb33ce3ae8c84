use super::thumby::Thumby;

/// A program written against the console API.
///
/// The host calls `update` once per frame. A frame typically fills the
/// display, reads buttons, draws, and ends with `thumby.display.update()`;
/// the host presents whatever frame was last published and then paces to
/// `thumby.display.fps()`.
pub trait Game {
    fn update(&mut self, thumby: &mut Thumby);
}
