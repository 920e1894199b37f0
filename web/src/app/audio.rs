use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

/// `(frequency Hz, start offset s, duration s)`
type Note = (f32, f64, f64);

/// Short ding confirming a revealed `Match`.
pub(in crate::app) fn play_ding() {
    if let Err(err) = play(&[(800.0, 0.0, 0.3)], 0.3) {
        log::debug!("audio not supported: {:?}", err);
    }
}

/// Rising arpeggio for a winning row (C5 E5 G5 C6).
pub(in crate::app) fn play_victory() {
    const FREQS: [f32; 4] = [523.25, 659.25, 783.99, 1046.5];
    let notes: Vec<Note> = FREQS
        .iter()
        .enumerate()
        .map(|(i, &freq)| (freq, i as f64 * 0.15, 0.4))
        .collect();
    if let Err(err) = play(&notes, 0.4) {
        log::debug!("audio not supported: {:?}", err);
    }
}

fn play(notes: &[Note], gain: f32) -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    for &(freq, offset, duration) in notes {
        let oscillator = ctx.create_oscillator()?;
        let gain_node = ctx.create_gain()?;

        oscillator.connect_with_audio_node(&gain_node)?;
        gain_node.connect_with_audio_node(&ctx.destination())?;

        oscillator.frequency().set_value(freq);
        oscillator.set_type(OscillatorType::Sine);

        let start = ctx.current_time() + offset;
        gain_node.gain().set_value_at_time(gain, start)?;
        gain_node
            .gain()
            .exponential_ramp_to_value_at_time(0.01, start + duration)?;

        oscillator.start_with_when(start)?;
        oscillator.stop_with_when(start + duration)?;
    }
    Ok(())
}
