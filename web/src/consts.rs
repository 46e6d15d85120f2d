pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3001";

/// Icon URL for action cards
pub const ICON_URL: &str = "/images/red-packet-icon.png";

/// Card titles
pub const CREATE_TITLE: &str = "Create Red Packet";
pub const CLAIM_TITLE: &str = "Red Packet";

/// Status strings reported for a red packet
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_FULLY_CLAIMED: &str = "fully_claimed";

/// Shown on the claim card, one picked at random per request
pub const LUCKY_PHRASES: &[&str] = &[
    "福如東海，壽比南山",
    "財源廣進，萬事如意",
    "吉祥如意，福壽安康",
    "鴻運當頭，事事順心",
    "五福臨門，百事亨通",
    "金玉滿堂，富貴榮華",
    "龍馬精神，步步高升",
    "福祿雙全，喜氣洋洋",
];
