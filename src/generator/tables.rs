//! Static reference pools the generators draw from.
//!
//! Nothing here is read directly by request handlers: the tables are checked
//! and wrapped by [`ReferenceData`](super::ReferenceData) once at startup.

use crate::domain::CountryRow;

pub const GIVEN_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Susan", "Richard", "Jessica", "Joseph", "Sarah", "Thomas", "Karen",
    "Charles", "Nancy", "Christopher", "Lisa", "Daniel", "Betty", "Matthew", "Margaret",
    "Anthony", "Sandra", "Mark", "Ashley", "Donald", "Kimberly", "Steven", "Emily", "Paul",
    "Donna", "Andrew", "Michelle", "Joshua", "Carol", "Kevin", "Dorothy", "Brian", "Helen",
    "Edward", "Sharon", "Ronald", "Laura", "Timothy", "Cynthia",
];

pub const FAMILY_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts",
];

pub const STREET_PREFIXES: &[&str] = &[
    "Maple", "Oak", "Pine", "Cedar", "Elm", "Birch", "Willow", "Magnolia", "Juniper",
    "Sycamore", "Aspen", "Sunset", "Sunrise", "Lakeview", "Hillside", "Riverside", "Mountain",
    "Valley", "Park", "Garden", "Highland", "North", "South", "East", "West", "Central",
    "Liberty", "Union", "Washington", "Jefferson", "Lincoln", "Main", "Broad", "Church",
    "School", "Railroad", "Station", "Airport", "Harbor", "Ocean", "River",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Boulevard", "Lane", "Plaza", "Circle", "Drive", "Court", "Way",
    "Terrace",
];

pub const COUNTRIES: &[CountryRow] = &[
    CountryRow {
        display_name: "United States",
        iso_code: "US",
        phone_template: "+1 (###) ###-####",
        phone_pattern: r"\+1 \(\d{3}\) \d{3}-\d{4}",
    },
    CountryRow {
        display_name: "United Kingdom",
        iso_code: "GB",
        phone_template: "+44 ## #### ####",
        phone_pattern: r"\+44 \d{2} \d{4} \d{4}",
    },
    CountryRow {
        display_name: "Canada",
        iso_code: "CA",
        phone_template: "+1 (###) ###-####",
        phone_pattern: r"\+1 \(\d{3}\) \d{3}-\d{4}",
    },
    CountryRow {
        display_name: "Australia",
        iso_code: "AU",
        phone_template: "+61 # #### ####",
        phone_pattern: r"\+61 \d \d{4} \d{4}",
    },
    CountryRow {
        display_name: "Germany",
        iso_code: "DE",
        phone_template: "+49 ### #######",
        phone_pattern: r"\+49 \d{3} \d{7}",
    },
    CountryRow {
        display_name: "France",
        iso_code: "FR",
        phone_template: "+33 # ## ## ## ##",
        phone_pattern: r"\+33 \d \d{2} \d{2} \d{2} \d{2}",
    },
    CountryRow {
        display_name: "Japan",
        iso_code: "JP",
        phone_template: "+81 ##-####-####",
        phone_pattern: r"\+81 \d{2}-\d{4}-\d{4}",
    },
    CountryRow {
        display_name: "Brazil",
        iso_code: "BR",
        phone_template: "+55 (##) #####-####",
        phone_pattern: r"\+55 \(\d{2}\) \d{5}-\d{4}",
    },
    CountryRow {
        display_name: "India",
        iso_code: "IN",
        phone_template: "+91 ####-######",
        phone_pattern: r"\+91 \d{4}-\d{6}",
    },
    CountryRow {
        display_name: "China",
        iso_code: "CN",
        phone_template: "+86 ### #### ####",
        phone_pattern: r"\+86 \d{3} \d{4} \d{4}",
    },
    CountryRow {
        display_name: "Italy",
        iso_code: "IT",
        phone_template: "+39 ### #######",
        phone_pattern: r"\+39 \d{3} \d{7}",
    },
    CountryRow {
        display_name: "Spain",
        iso_code: "ES",
        phone_template: "+34 ### ### ###",
        phone_pattern: r"\+34 \d{3} \d{3} \d{3}",
    },
    CountryRow {
        display_name: "Mexico",
        iso_code: "MX",
        phone_template: "+52 ### ### ####",
        phone_pattern: r"\+52 \d{3} \d{3} \d{4}",
    },
    CountryRow {
        display_name: "South Korea",
        iso_code: "KR",
        phone_template: "+82 ##-###-####",
        phone_pattern: r"\+82 \d{2}-\d{3}-\d{4}",
    },
    CountryRow {
        display_name: "Russia",
        iso_code: "RU",
        phone_template: "+7 (###) ###-##-##",
        phone_pattern: r"\+7 \(\d{3}\) \d{3}-\d{2}-\d{2}",
    },
    CountryRow {
        display_name: "Netherlands",
        iso_code: "NL",
        phone_template: "+31 ## ### ####",
        phone_pattern: r"\+31 \d{2} \d{3} \d{4}",
    },
    CountryRow {
        display_name: "Switzerland",
        iso_code: "CH",
        phone_template: "+41 ## ### ## ##",
        phone_pattern: r"\+41 \d{2} \d{3} \d{2} \d{2}",
    },
    CountryRow {
        display_name: "Sweden",
        iso_code: "SE",
        phone_template: "+46 ## ### ####",
        phone_pattern: r"\+46 \d{2} \d{3} \d{4}",
    },
    CountryRow {
        display_name: "Norway",
        iso_code: "NO",
        phone_template: "+47 ### ## ###",
        phone_pattern: r"\+47 \d{3} \d{2} \d{3}",
    },
    CountryRow {
        display_name: "South Africa",
        iso_code: "ZA",
        phone_template: "+27 ## ### ####",
        phone_pattern: r"\+27 \d{2} \d{3} \d{4}",
    },
    CountryRow {
        display_name: "Argentina",
        iso_code: "AR",
        phone_template: "+54 (###) ####-####",
        phone_pattern: r"\+54 \(\d{3}\) \d{4}-\d{4}",
    },
    CountryRow {
        display_name: "Turkey",
        iso_code: "TR",
        phone_template: "+90 (###) ### ####",
        phone_pattern: r"\+90 \(\d{3}\) \d{3} \d{4}",
    },
];

/// States, provinces and prefectures for the countries we know them for.
pub const REGIONS: &[(&str, &[&str])] = &[
    (
        "US",
        &[
            "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
            "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
            "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
            "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
            "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina",
            "North Dakota", "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island",
            "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia",
            "Washington", "West Virginia", "Wisconsin", "Wyoming",
        ],
    ),
    (
        "CA",
        &[
            "Alberta", "British Columbia", "Manitoba", "New Brunswick",
            "Newfoundland and Labrador", "Nova Scotia", "Ontario", "Prince Edward Island",
            "Quebec", "Saskatchewan", "Northwest Territories", "Nunavut", "Yukon",
        ],
    ),
    ("GB", &["England", "Scotland", "Wales", "Northern Ireland"]),
    (
        "AU",
        &[
            "New South Wales", "Queensland", "South Australia", "Tasmania", "Victoria",
            "Western Australia", "Australian Capital Territory", "Northern Territory",
        ],
    ),
    (
        "DE",
        &[
            "Baden-Württemberg", "Bavaria", "Berlin", "Brandenburg", "Bremen", "Hamburg", "Hesse",
            "Lower Saxony", "Mecklenburg-Vorpommern", "North Rhine-Westphalia",
            "Rhineland-Palatinate", "Saarland", "Saxony", "Saxony-Anhalt", "Schleswig-Holstein",
            "Thuringia",
        ],
    ),
    (
        "FR",
        &[
            "Auvergne-Rhône-Alpes", "Bourgogne-Franche-Comté", "Brittany", "Centre-Val de Loire",
            "Corsica", "Grand Est", "Hauts-de-France", "Île-de-France", "Normandy",
            "Nouvelle-Aquitaine", "Occitanie", "Pays de la Loire", "Provence-Alpes-Côte d'Azur",
        ],
    ),
    (
        "JP",
        &[
            "Hokkaido", "Aomori", "Iwate", "Miyagi", "Akita", "Yamagata", "Fukushima", "Ibaraki",
            "Tochigi", "Gunma", "Saitama", "Chiba", "Tokyo", "Kanagawa", "Niigata", "Toyama",
            "Ishikawa", "Fukui", "Yamanashi", "Nagano", "Gifu", "Shizuoka", "Aichi", "Mie",
            "Shiga", "Kyoto", "Osaka", "Hyogo", "Nara", "Wakayama", "Tottori", "Shimane",
            "Okayama", "Hiroshima", "Yamaguchi", "Tokushima", "Kagawa", "Ehime", "Kochi",
            "Fukuoka", "Saga", "Nagasaki", "Kumamoto", "Oita", "Miyazaki", "Kagoshima", "Okinawa",
        ],
    ),
];
