use hostbridge_core::{KeyCode, KeyEvent};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};

/// Maps a winit physical key onto the platform key code table.
///
/// Keys without an entry map to `KeyCode::UNKNOWN`; they still reach the
/// default key chain.
pub fn translate_key(key: PhysicalKey) -> KeyCode {
    let PhysicalKey::Code(code) = key else {
        return KeyCode::UNKNOWN;
    };

    match code {
        WinitKey::AudioVolumeUp => KeyCode::VOLUME_UP,
        WinitKey::AudioVolumeDown => KeyCode::VOLUME_DOWN,
        WinitKey::AudioVolumeMute => KeyCode::VOLUME_MUTE,

        WinitKey::Escape => KeyCode::ESCAPE,
        WinitKey::BrowserBack => KeyCode::BACK,
        WinitKey::Enter | WinitKey::NumpadEnter => KeyCode::ENTER,
        WinitKey::Space => KeyCode::SPACE,
        WinitKey::Backspace => KeyCode::DEL,
        WinitKey::Tab => KeyCode::TAB,

        WinitKey::ArrowUp => KeyCode::DPAD_UP,
        WinitKey::ArrowDown => KeyCode::DPAD_DOWN,
        WinitKey::ArrowLeft => KeyCode::DPAD_LEFT,
        WinitKey::ArrowRight => KeyCode::DPAD_RIGHT,

        other => letter_or_digit(other).unwrap_or(KeyCode::UNKNOWN),
    }
}

#[inline]
pub fn key_event(key: PhysicalKey, repeat: bool) -> KeyEvent {
    KeyEvent {
        code: translate_key(key),
        repeat,
    }
}

fn letter_or_digit(code: WinitKey) -> Option<KeyCode> {
    let c = match code {
        WinitKey::KeyA => 'A',
        WinitKey::KeyB => 'B',
        WinitKey::KeyC => 'C',
        WinitKey::KeyD => 'D',
        WinitKey::KeyE => 'E',
        WinitKey::KeyF => 'F',
        WinitKey::KeyG => 'G',
        WinitKey::KeyH => 'H',
        WinitKey::KeyI => 'I',
        WinitKey::KeyJ => 'J',
        WinitKey::KeyK => 'K',
        WinitKey::KeyL => 'L',
        WinitKey::KeyM => 'M',
        WinitKey::KeyN => 'N',
        WinitKey::KeyO => 'O',
        WinitKey::KeyP => 'P',
        WinitKey::KeyQ => 'Q',
        WinitKey::KeyR => 'R',
        WinitKey::KeyS => 'S',
        WinitKey::KeyT => 'T',
        WinitKey::KeyU => 'U',
        WinitKey::KeyV => 'V',
        WinitKey::KeyW => 'W',
        WinitKey::KeyX => 'X',
        WinitKey::KeyY => 'Y',
        WinitKey::KeyZ => 'Z',

        WinitKey::Digit0 | WinitKey::Numpad0 => return KeyCode::digit(0),
        WinitKey::Digit1 | WinitKey::Numpad1 => return KeyCode::digit(1),
        WinitKey::Digit2 | WinitKey::Numpad2 => return KeyCode::digit(2),
        WinitKey::Digit3 | WinitKey::Numpad3 => return KeyCode::digit(3),
        WinitKey::Digit4 | WinitKey::Numpad4 => return KeyCode::digit(4),
        WinitKey::Digit5 | WinitKey::Numpad5 => return KeyCode::digit(5),
        WinitKey::Digit6 | WinitKey::Numpad6 => return KeyCode::digit(6),
        WinitKey::Digit7 | WinitKey::Numpad7 => return KeyCode::digit(7),
        WinitKey::Digit8 | WinitKey::Numpad8 => return KeyCode::digit(8),
        WinitKey::Digit9 | WinitKey::Numpad9 => return KeyCode::digit(9),

        _ => return None,
    };
    KeyCode::letter(c)
}
