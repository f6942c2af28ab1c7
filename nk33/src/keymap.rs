use sdl2::keyboard::Keycode;

/// # Keymap
/// The Notkia-3310 face has twelve buttons feeding the low 12 bits of the
/// gamepad register.
///
/// ```text
/// |1|2|3|      bits 0..=2
/// |4|5|6|      bits 3..=5
/// |7|8|9|      bits 6..=8
/// |*|0|#|      bits 9..=11
/// ```
///
/// `*` and `#` sit on A and S.
pub fn keymap(key: Keycode) -> Option<u8> {
    match key {
        Keycode::Num1 => Some(0),
        Keycode::Num2 => Some(1),
        Keycode::Num3 => Some(2),
        Keycode::Num4 => Some(3),
        Keycode::Num5 => Some(4),
        Keycode::Num6 => Some(5),
        Keycode::Num7 => Some(6),
        Keycode::Num8 => Some(7),
        Keycode::Num9 => Some(8),
        Keycode::A => Some(9),
        Keycode::Num0 => Some(10),
        Keycode::S => Some(11),
        _ => None,
    }
}
