/// Demo sentences as `(label, urdu)` pairs.
pub const SAMPLES: &[(&str, &str)] = &[
    ("Greeting", "آپ کیسے ہیں"),
    ("Poetry", "چاند رات میں چمکتا ہے"),
    ("Simple", "یہ میرا گھر ہے"),
    ("Question", "آپ کا نام کیا ہے؟"),
    ("Nature", "پھول خوبصورت ہیں"),
];

pub fn sample(label: &str) -> Option<&'static str> {
    SAMPLES
        .iter()
        .find(|(l, _)| l.eq_ignore_ascii_case(label))
        .map(|&(_, text)| text)
}
