/// Hebrew (SI-1452) keys and the US QWERTY characters on the same physical keys.
///
/// Only the unshifted letter row keys are listed. Shifted keys already
/// produce Latin capitals on the Hebrew layout and are left alone.
pub const HEBREW_QWERTY: &[(char, char)] = &[
    // top row
    ('/', 'q'),
    ('\'', 'w'),
    ('׳', 'w'),
    ('ק', 'e'),
    ('ר', 'r'),
    ('א', 't'),
    ('ט', 'y'),
    ('ו', 'u'),
    ('ן', 'i'),
    ('ם', 'o'),
    ('פ', 'p'),
    // home row
    ('ש', 'a'),
    ('ד', 's'),
    ('ג', 'd'),
    ('כ', 'f'),
    ('ע', 'g'),
    ('י', 'h'),
    ('ח', 'j'),
    ('ל', 'k'),
    ('ך', 'l'),
    ('ף', ';'),
    // bottom row
    ('ז', 'z'),
    ('ס', 'x'),
    ('ב', 'c'),
    ('ה', 'v'),
    ('נ', 'b'),
    ('מ', 'n'),
    ('צ', 'm'),
    ('ת', ','),
    ('ץ', '.'),
];
