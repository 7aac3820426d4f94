//! Built-in storefront dataset.

use crate::catalog::{Product, ProductSpec};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

struct Entry {
    id: u32,
    name: &'static str,
    description: &'static str,
    long_description: &'static str,
    price_cents: i64,
    category: &'static str,
    badge: Option<&'static str>,
    rating: f32,
    reviews: u32,
    specs: &'static [(&'static str, &'static str)],
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        name: "Wireless Noise-Cancelling Headphones",
        description: "Premium over-ear headphones with active noise cancellation, 30-hour battery life, and studio-quality sound.",
        long_description: "Custom-tuned 40mm dynamic drivers, adaptive noise cancellation that adjusts to your surroundings, and memory-foam ear cushions for long listening sessions. Pairs with two devices at once over Bluetooth 5.3.",
        price_cents: 8999,
        category: "Audio",
        badge: Some("Best Seller"),
        rating: 4.8,
        reviews: 1240,
        specs: &[
            ("Driver Size", "40mm Dynamic"),
            ("Frequency Response", "20 Hz - 20 kHz"),
            ("Battery Life", "30 hrs (ANC on)"),
            ("Charging", "USB-C, 10 min for 3 hrs"),
            ("Connectivity", "Bluetooth 5.3, Multipoint"),
            ("Noise Cancellation", "Adaptive ANC"),
            ("Weight", "254 g"),
            ("In the Box", "Headphones, USB-C Cable, Carry Case"),
        ],
    },
    Entry {
        id: 2,
        name: "Pro Smartwatch Series X",
        description: "Advanced health tracking smartwatch with GPS, heart-rate monitor, sleep analysis, and 7-day battery.",
        long_description: "Tracks over 60 workout modes, blood-oxygen saturation, ECG and sleep stages. The always-on AMOLED display reaches 1000 nits and stays readable in direct sunlight. IP68 rated for swimming.",
        price_cents: 19999,
        category: "Wearables",
        badge: Some("New"),
        rating: 4.6,
        reviews: 876,
        specs: &[
            ("Display", "1.9\" AMOLED, 1000 nits"),
            ("Battery Life", "Up to 7 days"),
            ("Health Sensors", "Heart Rate, SpO2, ECG, Temperature"),
            ("GPS", "Built-in GNSS (GPS + GLONASS)"),
            ("Water Resistance", "IP68 (50m)"),
            ("Connectivity", "Bluetooth 5.2, Wi-Fi 2.4G"),
            ("Compatibility", "iOS 14+ / Android 8+"),
            ("Storage", "4 GB onboard"),
        ],
    },
    Entry {
        id: 3,
        name: "RGB Mechanical Gaming Keyboard",
        description: "Compact TKL mechanical keyboard with per-key RGB lighting, tactile switches, and aluminum top plate.",
        long_description: "The TKL layout frees desk space without dropping any typing keys. Per-key RGB lighting syncs across your setup, and the aluminum top plate damps vibration for a solid keystroke.",
        price_cents: 12999,
        category: "Peripherals",
        badge: Some("Top Rated"),
        rating: 4.7,
        reviews: 2150,
        specs: &[
            ("Layout", "TKL (87 keys)"),
            ("Switches", "Tactile Brown (hot-swap)"),
            ("RGB", "Per-key, 16.8M colors"),
            ("Top Plate", "Aircraft-grade Aluminum"),
            ("Polling Rate", "1000 Hz (1ms)"),
            ("Anti-ghosting", "Full N-Key Rollover"),
            ("Cable", "Detachable USB-C braided"),
            ("Weight", "870 g"),
        ],
    },
    Entry {
        id: 4,
        name: "Portable Bluetooth Speaker",
        description: "360\u{b0} surround sound portable speaker, IPX7 waterproof, 20-hour playtime, and deep bass radiator.",
        long_description: "A passive bass radiator delivers low end well beyond the speaker's size, and 360\u{b0} dispersion fills the room evenly. IPX7 certification means it keeps playing after a drop in the pool.",
        price_cents: 5999,
        category: "Audio",
        badge: Some("Popular"),
        rating: 4.5,
        reviews: 3420,
        specs: &[
            ("Output Power", "20W (2 x 10W)"),
            ("Bass Radiator", "Passive, dual-sided"),
            ("Battery Life", "20 hrs at 70% volume"),
            ("Water Resistance", "IPX7 (30 min @ 1m)"),
            ("Charging", "USB-C, 2.5 hrs full charge"),
            ("Connectivity", "Bluetooth 5.0, AUX-in"),
            ("Dimensions", "97 x 88 mm"),
            ("Weight", "540 g"),
        ],
    },
    Entry {
        id: 5,
        name: "4K Webcam Pro",
        description: "Ultra-sharp 4K webcam with autofocus, built-in ring light, dual noise-cancelling mics for streaming.",
        long_description: "Captures 4K at 30fps or 1080p at 60fps. Noise reduction and automatic exposure adapt to the room, and the built-in ring light offers three colour temperatures.",
        price_cents: 14999,
        category: "Peripherals",
        badge: Some("New"),
        rating: 4.4,
        reviews: 564,
        specs: &[
            ("Resolution", "4K/30fps or 1080p/60fps"),
            ("Sensor", "Sony STARVIS CMOS"),
            ("Field of View", "90\u{b0} adjustable"),
            ("Focus", "AI Auto-focus"),
            ("Microphone", "Dual beam-forming, noise-cancel"),
            ("Ring Light", "3 colour temps, 5 brightness"),
            ("Interface", "USB-A 3.0 (no driver needed)"),
            ("Compatibility", "Windows, macOS, ChromeOS, Linux"),
        ],
    },
    Entry {
        id: 6,
        name: "Ergonomic Wireless Mouse",
        description: "Sculpted ergonomic mouse with 6 programmable buttons, silent clicks, and 18-month battery.",
        long_description: "A contoured shell keeps your wrist in a neutral position through long work days. Quiet switches cut click noise, and a single AA battery lasts up to 18 months.",
        price_cents: 4999,
        category: "Peripherals",
        badge: None,
        rating: 4.6,
        reviews: 1890,
        specs: &[
            ("DPI Range", "400 - 4000 DPI (5 steps)"),
            ("Buttons", "6 programmable"),
            ("Clicks", "Silent (90% noise reduction)"),
            ("Battery", "1x AA, up to 18 months"),
            ("Connectivity", "2.4GHz nano receiver"),
            ("Weight", "101 g"),
            ("Hand", "Right-handed"),
            ("Compatibility", "Windows, macOS, Linux"),
        ],
    },
    Entry {
        id: 7,
        name: "USB-C 100W Charging Hub",
        description: "7-in-1 USB-C hub with 4K HDMI, 100W PD, SD card reader, and 3 USB 3.0 ports.",
        long_description: "Turns one USB-C port into a workstation: 4K@60Hz HDMI, 100W pass-through charging, SD and microSD readers, and three USB 3.0 ports in an aluminium housing.",
        price_cents: 3999,
        category: "Accessories",
        badge: None,
        rating: 4.3,
        reviews: 987,
        specs: &[
            ("Ports", "HDMI 4K, 3x USB-A 3.0, SD, microSD, USB-C PD"),
            ("HDMI", "4K @ 60 Hz"),
            ("Power Delivery", "100W pass-through"),
            ("USB-A Speed", "USB 3.0 (5 Gbps)"),
            ("SD Card Speed", "UHS-I, up to 104 MB/s"),
            ("Cable Length", "20 cm"),
            ("Housing", "Aluminium alloy"),
            ("Compatibility", "USB-C Thunderbolt 3/4 hosts"),
        ],
    },
    Entry {
        id: 8,
        name: "LED Gaming Monitor 27\"",
        description: "27-inch QHD IPS display, 165Hz refresh rate, 1ms response time, AMD FreeSync Premium.",
        long_description: "The 2560x1440 IPS panel covers 95% DCI-P3, while 165Hz and 1ms MPRT keep fast games sharp. The stand adjusts for height, tilt, swivel and pivot.",
        price_cents: 32999,
        category: "Displays",
        badge: Some("Editor's Pick"),
        rating: 4.9,
        reviews: 3102,
        specs: &[
            ("Panel", "27\" QHD IPS (2560x1440)"),
            ("Refresh Rate", "165 Hz"),
            ("Response Time", "1ms MPRT"),
            ("Color Gamut", "95% DCI-P3, 100% sRGB"),
            ("Brightness", "400 cd/m2 (HDR peak: 600)"),
            ("Sync", "AMD FreeSync Premium"),
            ("Inputs", "2x HDMI 2.0, 1x DisplayPort 1.4"),
            ("Stand", "Height, Tilt, Swivel, Pivot"),
        ],
    },
];

/// Materialize the dataset.
pub(crate) fn products() -> Vec<Product> {
    ENTRIES
        .iter()
        .map(|e| Product {
            id: ProductId::new(e.id),
            name: e.name.to_string(),
            description: e.description.to_string(),
            long_description: Some(e.long_description.to_string()),
            price: Money::new(e.price_cents, Currency::USD),
            category: e.category.to_string(),
            badge: e.badge.map(str::to_string),
            rating: Some(e.rating),
            reviews: Some(e.reviews),
            specs: e
                .specs
                .iter()
                .map(|(label, value)| ProductSpec::new(*label, *value))
                .collect(),
        })
        .collect()
}
