
/// Tokens counted as bullish in a headline.
pub const POSITIVE: &[&str] = &[
    "bullish", "rise", "up", "gain", "profit", "growth", "strong", "buy", "positive", "surge",
    "rally", "boom", "success", "win", "beat", "outperform", "soar", "jump", "climb", "advance",
];

/// Tokens counted as bearish in a headline.
pub const NEGATIVE: &[&str] = &[
    "bearish", "fall", "down", "loss", "decline", "weak", "sell", "negative", "drop", "crash",
    "bust", "fail", "lose", "miss", "underperform", "plunge", "slide", "dip", "retreat", "worry",
];
