//! Typing into the masked input, one key at a time.

use ecalendar::{
    arithmetic::days_in_month,
    mask::{self, MaskBuffer, PLACEHOLDER, SEPARATOR},
};

/// What a mask input with the cursor at the end sends after `key` is pressed:
/// the key lands in the first empty slot. Separators are typed over.
fn type_key(buffer: &MaskBuffer, key: char) -> String {
    let text = buffer.to_string();
    if key == SEPARATOR {
        return text;
    }
    match text.find(PLACEHOLDER) {
        Some(index) => {
            let mut raw = text;
            raw.replace_range(index..index + 1, &key.to_string());
            raw
        }
        None => text,
    }
}

fn number(buffer: &MaskBuffer, slots: std::ops::Range<usize>) -> Option<u32> {
    slots
        .map(|index| buffer.slot(index))
        .try_fold(0, |acc, digit| Some(acc * 10 + u32::from(digit?)))
}

/// Month never above 12, day never above the length of the typed month.
fn assert_plausible(buffer: &MaskBuffer, keys: &str) {
    if let Some(month) = number(buffer, 4..6) {
        assert!(month <= 12, "{keys:?} gave {buffer}");
        if let Some(year) = number(buffer, 0..4)
            && (1..=12).contains(&month)
            && let Some(day) = number(buffer, 6..8)
        {
            assert!(
                day <= days_in_month(year as i32, month),
                "{keys:?} gave {buffer}"
            );
        }
    }
    if let Some(tens) = buffer.slot(4) {
        assert!(tens <= 1, "{keys:?} gave {buffer}");
    }
}

fn type_keys(keys: &str) -> MaskBuffer {
    let mut buffer = MaskBuffer::empty();
    for key in keys.chars() {
        buffer = mask::correct(&buffer, &type_key(&buffer, key)).buffer;
        assert_plausible(&buffer, keys);
    }
    buffer
}

#[test]
fn typing_one_slash_nines() {
    let buffer = type_keys("1/99/99");
    assert_eq!(buffer.to_string(), "2999/__/__");
}

#[test]
fn typing_a_full_date() {
    let buffer = type_keys("2024/02/31");
    assert_eq!(buffer.to_string(), "2024/02/29");
    assert_eq!(buffer.to_date().map(|d| d.to_string()), Some("2024-02-29".to_owned()));

    let buffer = type_keys("20231231");
    assert_eq!(buffer.to_string(), "2023/12/31");
}

#[test]
fn typing_many_digit_sequences_stays_plausible() {
    // Deterministic pseudo-random digit strings.
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..2000 {
        let keys: String = (0..8)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                char::from(b'0' + (seed % 10) as u8)
            })
            .collect();
        let buffer = type_keys(&keys);
        if let Some(date) = buffer.to_date() {
            assert!(date.year() >= 2000, "{keys:?} gave {buffer}");
        }
    }
}
