//! Static content of the informational screens and the screen routes.
//!
//! All tables are fixed at compile time. Screens only read from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::locale::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Screen {
    #[default]
    Home,
    Complaint,
    Schedule,
    Emergency,
    Advisory,
    Technical,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::Complaint,
        Screen::Schedule,
        Screen::Emergency,
        Screen::Advisory,
        Screen::Technical,
    ];

    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Complaint => "Complaint",
            Self::Schedule => "Schedule",
            Self::Emergency => "Emergency",
            Self::Advisory => "Advisory",
            Self::Technical => "Technical",
        }
    }

    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.route() == route)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// Navigation service provided by the shell.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, screen: Screen);
}

// --- Collection schedule ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, Self::Sun) => "Sunday",
            (Language::English, Self::Mon) => "Monday",
            (Language::English, Self::Tue) => "Tuesday",
            (Language::English, Self::Wed) => "Wednesday",
            (Language::English, Self::Thu) => "Thursday",
            (Language::English, Self::Fri) => "Friday",
            (Language::English, Self::Sat) => "Saturday",
            (Language::Arabic, Self::Sun) => "الأحد",
            (Language::Arabic, Self::Mon) => "الاثنين",
            (Language::Arabic, Self::Tue) => "الثلاثاء",
            (Language::Arabic, Self::Wed) => "الأربعاء",
            (Language::Arabic, Self::Thu) => "الخميس",
            (Language::Arabic, Self::Fri) => "الجمعة",
            (Language::Arabic, Self::Sat) => "السبت",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WasteType {
    Residual,
    Recyclable,
    FoodAndBio,
}

impl WasteType {
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, Self::Residual) => "Residual Waste",
            (Language::English, Self::Recyclable) => "Recyclable Waste",
            (Language::English, Self::FoodAndBio) => "Food & Bio Waste",
            (Language::Arabic, Self::Residual) => "النفايات المتبقية",
            (Language::Arabic, Self::Recyclable) => "النفايات القابلة لإعادة التدوير",
            (Language::Arabic, Self::FoodAndBio) => "النفايات الغذائية والحيوية",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pickup {
    pub id: u32,
    pub date: &'static str,
    pub day: Weekday,
    pub time: &'static str,
    pub waste: WasteType,
}

pub static COLLECTION_SCHEDULE: [Pickup; 7] = [
    Pickup {
        id: 1,
        date: "09",
        day: Weekday::Sun,
        time: "9:00 AM - 11:00 AM",
        waste: WasteType::Residual,
    },
    Pickup {
        id: 2,
        date: "16",
        day: Weekday::Sun,
        time: "9:00 AM - 11:00 AM",
        waste: WasteType::Recyclable,
    },
    Pickup {
        id: 3,
        date: "16",
        day: Weekday::Sun,
        time: "3:00 PM - 4:00 PM",
        waste: WasteType::FoodAndBio,
    },
    Pickup {
        id: 4,
        date: "23",
        day: Weekday::Sun,
        time: "9:00 AM - 11:00 AM",
        waste: WasteType::Residual,
    },
    Pickup {
        id: 5,
        date: "06",
        day: Weekday::Sun,
        time: "9:00 AM - 11:00 AM",
        waste: WasteType::Recyclable,
    },
    Pickup {
        id: 6,
        date: "06",
        day: Weekday::Sun,
        time: "3:00 PM - 4:00 PM",
        waste: WasteType::FoodAndBio,
    },
    Pickup {
        id: 7,
        date: "13",
        day: Weekday::Sun,
        time: "9:00 AM - 11:00 AM",
        waste: WasteType::Residual,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleStrings {
    pub back: &'static str,
    pub header: &'static str,
    pub collection_message: &'static str,
}

#[must_use]
pub const fn schedule_strings(language: Language) -> ScheduleStrings {
    match language {
        Language::English => ScheduleStrings {
            back: "Back",
            header: "Schedule of Garbage/Damage Pickup",
            collection_message: "Ready for the next Collection",
        },
        Language::Arabic => ScheduleStrings {
            back: "خلف",
            header: "جدول جمع النفايات / الأضرار",
            collection_message: "جاهز للجمع القادم",
        },
    }
}

/// One schedule row with its labels resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickupView {
    pub id: u32,
    pub date: &'static str,
    pub day: &'static str,
    pub time: &'static str,
    pub waste: &'static str,
}

#[must_use]
pub fn schedule(language: Language) -> Vec<PickupView> {
    COLLECTION_SCHEDULE
        .iter()
        .map(|p| PickupView {
            id: p.id,
            date: p.date,
            day: p.day.label(language),
            time: p.time,
            waste: p.waste.label(language),
        })
        .collect()
}

// --- Advisory events ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvisoryEvent {
    pub id: u32,
    pub date: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    pub title: &'static str,
    pub time: &'static str,
    pub place: Option<&'static str>,
    pub details: &'static str,
}

static ADVISORY_EN: [AdvisoryEvent; 3] = [
    AdvisoryEvent {
        id: 1,
        date: "15",
        month: "March 2025",
        day: "Sat",
        title: "Scheduled Waste Collection Delay",
        time: "8:00 AM - 12:00 PM",
        place: Some("Downtown & Eastside Areas"),
        details: "Due to road maintenance, waste collection will be delayed. Please keep your bins secured until further notice.",
    },
    AdvisoryEvent {
        id: 2,
        date: "24",
        month: "March 2025",
        day: "Mon",
        title: "Recycling Awareness Drive",
        time: "10:00 AM - 4:00 PM",
        place: Some("Community Hall, Green Park"),
        details: "Join us for an interactive session on proper waste segregation and recycling benefits.",
    },
    AdvisoryEvent {
        id: 3,
        date: "1",
        month: "March 2025",
        day: "Tue",
        title: "Garbage Collection Time Change",
        time: "3:00 PM - 4:00 PM",
        place: None,
        details: "Starting April 1, 2025, collection times will shift from 6:00 AM - 9:00 AM to 5:00 AM - 8:00 AM due to summer heat conditions.",
    },
];

static ADVISORY_AR: [AdvisoryEvent; 3] = [
    AdvisoryEvent {
        id: 1,
        date: "15",
        month: "مارس 2025",
        day: "السبت",
        title: "تأخير جمع النفايات المجدولة",
        time: "8:00 ص - 12:00 م",
        place: Some("وسط المدينة والمناطق الشرقية"),
        details: "نظرًا لأعمال الصيانة على الطرق، سيتم تأخير جمع النفايات. يرجى إبقاء صناديق القمامة مغلقة حتى إشعار آخر.",
    },
    AdvisoryEvent {
        id: 2,
        date: "24",
        month: "مارس 2025",
        day: "الاثنين",
        title: "حملة توعية لإعادة التدوير",
        time: "10:00 ص - 4:00 م",
        place: Some("قاعة المجتمع، حديقة جرين بارك"),
        details: "انضم إلينا في جلسة تفاعلية حول الفرز الصحيح للنفايات وفوائد إعادة التدوير.",
    },
    AdvisoryEvent {
        id: 3,
        date: "1",
        month: "مارس 2025",
        day: "الثلاثاء",
        title: "تغيير وقت جمع النفايات",
        time: "3:00 م - 4:00 م",
        place: None,
        details: "اعتبارًا من 1 أبريل 2025، ستتغير أوقات الجمع من 6:00 ص - 9:00 ص إلى 5:00 ص - 8:00 ص بسبب حرارة الصيف.",
    },
];

#[must_use]
pub fn advisory_events(language: Language) -> &'static [AdvisoryEvent] {
    match language {
        Language::English => &ADVISORY_EN,
        Language::Arabic => &ADVISORY_AR,
    }
}

#[must_use]
pub const fn advisory_header(language: Language) -> &'static str {
    match language {
        Language::English => "Advisory Event",
        Language::Arabic => "حدث استشاري",
    }
}

// --- Technical support ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportEntry {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SUPPORT_PHONE: &str = "+966508624264";

static SUPPORT_EN: [SupportEntry; 4] = [
    SupportEntry {
        title: "Customer Support",
        description: SUPPORT_PHONE,
    },
    SupportEntry {
        title: "General Inquiries",
        description: "We value your feedback and are eager to provide any information",
    },
    SupportEntry {
        title: "Headquarter",
        description: "We welcome collaboration proposals and partnership",
    },
    SupportEntry {
        title: "Head Office",
        description: "Dammam - Uthman Ibn Affan St. Al Rayyan Trading Center - Office No.107",
    },
];

static SUPPORT_AR: [SupportEntry; 4] = [
    SupportEntry {
        title: "دعم العملاء",
        description: SUPPORT_PHONE,
    },
    SupportEntry {
        title: "الاستفسارات العامة",
        description: "نحن نقدر ملاحظاتك ونتطلع إلى تقديم أي معلومات",
    },
    SupportEntry {
        title: "المقر الرئيسي",
        description: "نحن نرحب بمقترحات التعاون والشراكة",
    },
    SupportEntry {
        title: "المكتب الرئيسي",
        description: "الدمام - شارع عثمان بن عفان - مركز الريان التجاري - مكتب رقم 107",
    },
];

#[must_use]
pub fn support_entries(language: Language) -> &'static [SupportEntry] {
    match language {
        Language::English => &SUPPORT_EN,
        Language::Arabic => &SUPPORT_AR,
    }
}

#[must_use]
pub const fn support_header(language: Language) -> &'static str {
    match language {
        Language::English => "Technical Support",
        Language::Arabic => "الدعم الفني",
    }
}

// --- Emergency ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyStrings {
    pub back: &'static str,
    pub header: &'static str,
    pub description: &'static str,
    pub cancel: &'static str,
}

#[must_use]
pub const fn emergency_strings(language: Language) -> EmergencyStrings {
    match language {
        Language::English => EmergencyStrings {
            back: "Back",
            header: "Having an Emergency?",
            description: "Press the button below help will arrive soon.",
            cancel: "Cancel",
        },
        Language::Arabic => EmergencyStrings {
            back: "خلف",
            header: "وجود حالة الطوارئ؟",
            description: "اضغط على الزر أدناه وسوف تصل المساعدة قريبا.",
            cancel: "يلغي",
        },
    }
}
