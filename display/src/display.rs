use sdl2::pixels::PixelFormatEnum;

use nk33_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use nk33_core::FrameBuffer;

const SCALE: usize = 10;

/// Backlight colors of the Notkia LCD: unlit and lit pixels.
const DARK: [u8; 3] = [0x43, 0x52, 0x3D];
const LIGHT: [u8; 3] = [0xC7, 0xF0, 0xD8];

/// # Display
/// The Notkia-3310 screen is 84x48 monochrome pixels. Each framebuffer
/// byte selects one of the two LCD colors; the resulting texture is
/// stretched to whatever size the window currently has.
/// The display only gets a call to `render` when the redraw flag is raised.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

// TODO handle errors better
impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    pub fn new(sdl: &sdl2::Sdl) -> Self {
        let video_subsystem = sdl.video().unwrap();
        let window = video_subsystem
            .window(
                "NK33",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .resizable()
            .opengl()
            .build()
            .unwrap();
        let canvas = window.into_canvas().build().unwrap();

        Display { canvas }
    }

    /// Formats an NK33 framebuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of ints that represent concatenated
    /// rows of RGB pixels; each 0/1 pixel expands to the dark or light
    /// LCD color.
    ///
    /// # Arguments
    /// * `frame` an NK33 framebuffer
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .pixels()
            .iter()
            .flat_map(|&px| if px == 0 { DARK } else { LIGHT })
            .collect()
    }

    /// Formats the framebuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` an NK33 framebuffer
    pub fn render(&mut self, frame: &FrameBuffer) {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .unwrap();

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Display::frame_to_sdl_texture(frame));
            })
            .unwrap();

        self.canvas.copy(&texture, None, None).unwrap();
        self.canvas.present()
    }
}
