use raylib::prelude::*;

use crate::controls::Control;

/// Lifecycle of a view driven by the main loop.
///
/// Nothing runs before `mount()`; `unmount()` cancels every timer the view
/// scheduled so a torn-down view is never touched again.
pub trait Engine {
    fn mount(&mut self);
    fn update(&mut self, dt: f32);
    fn apply(&mut self, control: Control);
    fn render_frame(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        framebuffer: &mut RenderTexture2D,
    );
    fn unmount(&mut self);
}
