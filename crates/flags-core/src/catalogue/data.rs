//! Built-in country table and continent assignments

use super::CountryRecord;
use crate::continent::Continent;

/// Every country shown in the grid, grouped and sorted at render time.
pub(super) static COUNTRIES: &[CountryRecord] = &[
    CountryRecord::new("AF", "Afghanistan", "Kabul", "🇦🇫"),
    CountryRecord::new("AL", "Albania", "Tirana", "🇦🇱"),
    CountryRecord::new("DZ", "Algeria", "Algiers", "🇩🇿"),
    CountryRecord::new("AD", "Andorra", "Andorra la Vella", "🇦🇩"),
    CountryRecord::new("AO", "Angola", "Luanda", "🇦🇴"),
    CountryRecord::new("AG", "Antigua and Barbuda", "Saint John's", "🇦🇬"),
    CountryRecord::new("AR", "Argentina", "Buenos Aires", "🇦🇷"),
    CountryRecord::new("AM", "Armenia", "Yerevan", "🇦🇲"),
    CountryRecord::new("AU", "Australia", "Canberra", "🇦🇺"),
    CountryRecord::new("AT", "Austria", "Vienna", "🇦🇹"),
    CountryRecord::new("AZ", "Azerbaijan", "Baku", "🇦🇿"),
    CountryRecord::new("BS", "Bahamas", "Nassau", "🇧🇸"),
    CountryRecord::new("BH", "Bahrain", "Manama", "🇧🇭"),
    CountryRecord::new("BD", "Bangladesh", "Dhaka", "🇧🇩"),
    CountryRecord::new("BB", "Barbados", "Bridgetown", "🇧🇧"),
    CountryRecord::new("BY", "Belarus", "Minsk", "🇧🇾"),
    CountryRecord::new("BE", "Belgium", "Brussels", "🇧🇪"),
    CountryRecord::new("BZ", "Belize", "Belmopan", "🇧🇿"),
    CountryRecord::new("BJ", "Benin", "Porto-Novo", "🇧🇯"),
    CountryRecord::new("BT", "Bhutan", "Thimphu", "🇧🇹"),
    CountryRecord::new("BO", "Bolivia", "Sucre", "🇧🇴"),
    CountryRecord::new("BA", "Bosnia and Herzegovina", "Sarajevo", "🇧🇦"),
    CountryRecord::new("BW", "Botswana", "Gaborone", "🇧🇼"),
    CountryRecord::new("BR", "Brazil", "Brasília", "🇧🇷"),
    CountryRecord::new("BN", "Brunei", "Bandar Seri Begawan", "🇧🇳"),
    CountryRecord::new("BG", "Bulgaria", "Sofia", "🇧🇬"),
    CountryRecord::new("BF", "Burkina Faso", "Ouagadougou", "🇧🇫"),
    CountryRecord::new("BI", "Burundi", "Gitega", "🇧🇮"),
    CountryRecord::new("CV", "Cape Verde", "Praia", "🇨🇻"),
    CountryRecord::new("KH", "Cambodia", "Phnom Penh", "🇰🇭"),
    CountryRecord::new("CM", "Cameroon", "Yaoundé", "🇨🇲"),
    CountryRecord::new("CA", "Canada", "Ottawa", "🇨🇦"),
    CountryRecord::new("CF", "Central African Republic", "Bangui", "🇨🇫"),
    CountryRecord::new("TD", "Chad", "N'Djamena", "🇹🇩"),
    CountryRecord::new("CL", "Chile", "Santiago", "🇨🇱"),
    CountryRecord::new("CN", "China", "Beijing", "🇨🇳"),
    CountryRecord::new("CO", "Colombia", "Bogotá", "🇨🇴"),
    CountryRecord::new("KM", "Comoros", "Moroni", "🇰🇲"),
    CountryRecord::new("CG", "Republic of the Congo", "Brazzaville", "🇨🇬"),
    CountryRecord::new("CD", "DR Congo", "Kinshasa", "🇨🇩"),
    CountryRecord::new("CR", "Costa Rica", "San José", "🇨🇷"),
    CountryRecord::new("CI", "Ivory Coast", "Yamoussoukro", "🇨🇮"),
    CountryRecord::new("HR", "Croatia", "Zagreb", "🇭🇷"),
    CountryRecord::new("CU", "Cuba", "Havana", "🇨🇺"),
    CountryRecord::new("CY", "Cyprus", "Nicosia", "🇨🇾"),
    CountryRecord::new("CZ", "Czech Republic", "Prague", "🇨🇿"),
    CountryRecord::new("DK", "Denmark", "Copenhagen", "🇩🇰"),
    CountryRecord::new("DJ", "Djibouti", "Djibouti", "🇩🇯"),
    CountryRecord::new("DM", "Dominica", "Roseau", "🇩🇲"),
    CountryRecord::new("DO", "Dominican Republic", "Santo Domingo", "🇩🇴"),
    CountryRecord::new("EC", "Ecuador", "Quito", "🇪🇨"),
    CountryRecord::new("EG", "Egypt", "Cairo", "🇪🇬"),
    CountryRecord::new("SV", "El Salvador", "San Salvador", "🇸🇻"),
    CountryRecord::new("GQ", "Equatorial Guinea", "Malabo", "🇬🇶"),
    CountryRecord::new("ER", "Eritrea", "Asmara", "🇪🇷"),
    CountryRecord::new("EE", "Estonia", "Tallinn", "🇪🇪"),
    CountryRecord::new("SZ", "Eswatini", "Mbabane", "🇸🇿"),
    CountryRecord::new("ET", "Ethiopia", "Addis Ababa", "🇪🇹"),
    CountryRecord::new("FJ", "Fiji", "Suva", "🇫🇯"),
    CountryRecord::new("FI", "Finland", "Helsinki", "🇫🇮"),
    CountryRecord::new("FR", "France", "Paris", "🇫🇷"),
    CountryRecord::new("GA", "Gabon", "Libreville", "🇬🇦"),
    CountryRecord::new("GM", "Gambia", "Banjul", "🇬🇲"),
    CountryRecord::new("GE", "Georgia", "Tbilisi", "🇬🇪"),
    CountryRecord::new("DE", "Germany", "Berlin", "🇩🇪"),
    CountryRecord::new("GH", "Ghana", "Accra", "🇬🇭"),
    CountryRecord::new("GR", "Greece", "Athens", "🇬🇷"),
    CountryRecord::new("GD", "Grenada", "Saint George's", "🇬🇩"),
    CountryRecord::new("GT", "Guatemala", "Guatemala City", "🇬🇹"),
    CountryRecord::new("GN", "Guinea", "Conakry", "🇬🇳"),
    CountryRecord::new("GW", "Guinea-Bissau", "Bissau", "🇬🇼"),
    CountryRecord::new("GY", "Guyana", "Georgetown", "🇬🇾"),
    CountryRecord::new("HT", "Haiti", "Port-au-Prince", "🇭🇹"),
    CountryRecord::new("HN", "Honduras", "Tegucigalpa", "🇭🇳"),
    CountryRecord::new("HU", "Hungary", "Budapest", "🇭🇺"),
    CountryRecord::new("IS", "Iceland", "Reykjavík", "🇮🇸"),
    CountryRecord::new("IN", "India", "New Delhi", "🇮🇳"),
    CountryRecord::new("ID", "Indonesia", "Jakarta", "🇮🇩"),
    CountryRecord::new("IR", "Iran", "Tehran", "🇮🇷"),
    CountryRecord::new("IQ", "Iraq", "Baghdad", "🇮🇶"),
    CountryRecord::new("IE", "Ireland", "Dublin", "🇮🇪"),
    CountryRecord::new("IL", "Israel", "Jerusalem", "🇮🇱"),
    CountryRecord::new("IT", "Italy", "Rome", "🇮🇹"),
    CountryRecord::new("JM", "Jamaica", "Kingston", "🇯🇲"),
    CountryRecord::new("JP", "Japan", "Tokyo", "🇯🇵"),
    CountryRecord::new("JO", "Jordan", "Amman", "🇯🇴"),
    CountryRecord::new("KZ", "Kazakhstan", "Astana", "🇰🇿"),
    CountryRecord::new("KE", "Kenya", "Nairobi", "🇰🇪"),
    CountryRecord::new("KI", "Kiribati", "Tarawa", "🇰🇮"),
    CountryRecord::new("KP", "North Korea", "Pyongyang", "🇰🇵"),
    CountryRecord::new("KR", "South Korea", "Seoul", "🇰🇷"),
    CountryRecord::new("XK", "Kosovo", "Pristina", "🇽🇰"),
    CountryRecord::new("KW", "Kuwait", "Kuwait City", "🇰🇼"),
    CountryRecord::new("KG", "Kyrgyzstan", "Bishkek", "🇰🇬"),
    CountryRecord::new("LA", "Laos", "Vientiane", "🇱🇦"),
    CountryRecord::new("LV", "Latvia", "Riga", "🇱🇻"),
    CountryRecord::new("LB", "Lebanon", "Beirut", "🇱🇧"),
    CountryRecord::new("LS", "Lesotho", "Maseru", "🇱🇸"),
    CountryRecord::new("LR", "Liberia", "Monrovia", "🇱🇷"),
    CountryRecord::new("LY", "Libya", "Tripoli", "🇱🇾"),
    CountryRecord::new("LI", "Liechtenstein", "Vaduz", "🇱🇮"),
    CountryRecord::new("LT", "Lithuania", "Vilnius", "🇱🇹"),
    CountryRecord::new("LU", "Luxembourg", "Luxembourg", "🇱🇺"),
    CountryRecord::new("MG", "Madagascar", "Antananarivo", "🇲🇬"),
    CountryRecord::new("MW", "Malawi", "Lilongwe", "🇲🇼"),
    CountryRecord::new("MY", "Malaysia", "Kuala Lumpur", "🇲🇾"),
    CountryRecord::new("MV", "Maldives", "Malé", "🇲🇻"),
    CountryRecord::new("ML", "Mali", "Bamako", "🇲🇱"),
    CountryRecord::new("MT", "Malta", "Valletta", "🇲🇹"),
    CountryRecord::new("MH", "Marshall Islands", "Majuro", "🇲🇭"),
    CountryRecord::new("MR", "Mauritania", "Nouakchott", "🇲🇷"),
    CountryRecord::new("MU", "Mauritius", "Port Louis", "🇲🇺"),
    CountryRecord::new("MX", "Mexico", "Mexico City", "🇲🇽"),
    CountryRecord::new("FM", "Micronesia", "Palikir", "🇫🇲"),
    CountryRecord::new("MD", "Moldova", "Chișinău", "🇲🇩"),
    CountryRecord::new("MC", "Monaco", "Monaco", "🇲🇨"),
    CountryRecord::new("MN", "Mongolia", "Ulaanbaatar", "🇲🇳"),
    CountryRecord::new("ME", "Montenegro", "Podgorica", "🇲🇪"),
    CountryRecord::new("MA", "Morocco", "Rabat", "🇲🇦"),
    CountryRecord::new("MZ", "Mozambique", "Maputo", "🇲🇿"),
    CountryRecord::new("MM", "Myanmar", "Naypyidaw", "🇲🇲"),
    CountryRecord::new("NA", "Namibia", "Windhoek", "🇳🇦"),
    CountryRecord::new("NR", "Nauru", "Yaren", "🇳🇷"),
    CountryRecord::new("NP", "Nepal", "Kathmandu", "🇳🇵"),
    CountryRecord::new("NL", "Netherlands", "Amsterdam", "🇳🇱"),
    CountryRecord::new("NZ", "New Zealand", "Wellington", "🇳🇿"),
    CountryRecord::new("NI", "Nicaragua", "Managua", "🇳🇮"),
    CountryRecord::new("NE", "Niger", "Niamey", "🇳🇪"),
    CountryRecord::new("NG", "Nigeria", "Abuja", "🇳🇬"),
    CountryRecord::new("MK", "North Macedonia", "Skopje", "🇲🇰"),
    CountryRecord::new("NO", "Norway", "Oslo", "🇳🇴"),
    CountryRecord::new("OM", "Oman", "Muscat", "🇴🇲"),
    CountryRecord::new("PK", "Pakistan", "Islamabad", "🇵🇰"),
    CountryRecord::new("PW", "Palau", "Ngerulmud", "🇵🇼"),
    CountryRecord::new("PS", "Palestine", "Ramallah", "🇵🇸"),
    CountryRecord::new("PA", "Panama", "Panama City", "🇵🇦"),
    CountryRecord::new("PG", "Papua New Guinea", "Port Moresby", "🇵🇬"),
    CountryRecord::new("PY", "Paraguay", "Asunción", "🇵🇾"),
    CountryRecord::new("PE", "Peru", "Lima", "🇵🇪"),
    CountryRecord::new("PH", "Philippines", "Manila", "🇵🇭"),
    CountryRecord::new("PL", "Poland", "Warsaw", "🇵🇱"),
    CountryRecord::new("PT", "Portugal", "Lisbon", "🇵🇹"),
    CountryRecord::new("QA", "Qatar", "Doha", "🇶🇦"),
    CountryRecord::new("RO", "Romania", "Bucharest", "🇷🇴"),
    CountryRecord::new("RU", "Russia", "Moscow", "🇷🇺"),
    CountryRecord::new("RW", "Rwanda", "Kigali", "🇷🇼"),
    CountryRecord::new("KN", "Saint Kitts and Nevis", "Basseterre", "🇰🇳"),
    CountryRecord::new("LC", "Saint Lucia", "Castries", "🇱🇨"),
    CountryRecord::new("VC", "Saint Vincent and the Grenadines", "Kingstown", "🇻🇨"),
    CountryRecord::new("WS", "Samoa", "Apia", "🇼🇸"),
    CountryRecord::new("SM", "San Marino", "San Marino", "🇸🇲"),
    CountryRecord::new("ST", "São Tomé and Príncipe", "São Tomé", "🇸🇹"),
    CountryRecord::new("SA", "Saudi Arabia", "Riyadh", "🇸🇦"),
    CountryRecord::new("SN", "Senegal", "Dakar", "🇸🇳"),
    CountryRecord::new("RS", "Serbia", "Belgrade", "🇷🇸"),
    CountryRecord::new("SC", "Seychelles", "Victoria", "🇸🇨"),
    CountryRecord::new("SL", "Sierra Leone", "Freetown", "🇸🇱"),
    CountryRecord::new("SG", "Singapore", "Singapore", "🇸🇬"),
    CountryRecord::new("SK", "Slovakia", "Bratislava", "🇸🇰"),
    CountryRecord::new("SI", "Slovenia", "Ljubljana", "🇸🇮"),
    CountryRecord::new("SB", "Solomon Islands", "Honiara", "🇸🇧"),
    CountryRecord::new("SO", "Somalia", "Mogadishu", "🇸🇴"),
    CountryRecord::new("ZA", "South Africa", "Pretoria", "🇿🇦"),
    CountryRecord::new("SS", "South Sudan", "Juba", "🇸🇸"),
    CountryRecord::new("ES", "Spain", "Madrid", "🇪🇸"),
    CountryRecord::new("LK", "Sri Lanka", "Sri Jayawardenepura Kotte", "🇱🇰"),
    CountryRecord::new("SD", "Sudan", "Khartoum", "🇸🇩"),
    CountryRecord::new("SR", "Suriname", "Paramaribo", "🇸🇷"),
    CountryRecord::new("SE", "Sweden", "Stockholm", "🇸🇪"),
    CountryRecord::new("CH", "Switzerland", "Bern", "🇨🇭"),
    CountryRecord::new("SY", "Syria", "Damascus", "🇸🇾"),
    CountryRecord::new("TW", "Taiwan", "Taipei", "🇹🇼"),
    CountryRecord::new("TJ", "Tajikistan", "Dushanbe", "🇹🇯"),
    CountryRecord::new("TZ", "Tanzania", "Dodoma", "🇹🇿"),
    CountryRecord::new("TH", "Thailand", "Bangkok", "🇹🇭"),
    CountryRecord::new("TL", "East Timor", "Dili", "🇹🇱"),
    CountryRecord::new("TG", "Togo", "Lomé", "🇹🇬"),
    CountryRecord::new("TO", "Tonga", "Nukuʻalofa", "🇹🇴"),
    CountryRecord::new("TT", "Trinidad and Tobago", "Port of Spain", "🇹🇹"),
    CountryRecord::new("TN", "Tunisia", "Tunis", "🇹🇳"),
    CountryRecord::new("TR", "Turkey", "Ankara", "🇹🇷"),
    CountryRecord::new("TM", "Turkmenistan", "Ashgabat", "🇹🇲"),
    CountryRecord::new("TV", "Tuvalu", "Funafuti", "🇹🇻"),
    CountryRecord::new("UG", "Uganda", "Kampala", "🇺🇬"),
    CountryRecord::new("UA", "Ukraine", "Kyiv", "🇺🇦"),
    CountryRecord::new("AE", "United Arab Emirates", "Abu Dhabi", "🇦🇪"),
    CountryRecord::new("GB", "United Kingdom", "London", "🇬🇧"),
    CountryRecord::new("US", "United States", "Washington, D.C.", "🇺🇸"),
    CountryRecord::new("UY", "Uruguay", "Montevideo", "🇺🇾"),
    CountryRecord::new("UZ", "Uzbekistan", "Tashkent", "🇺🇿"),
    CountryRecord::new("VU", "Vanuatu", "Port Vila", "🇻🇺"),
    CountryRecord::new("VA", "Vatican City", "Vatican City", "🇻🇦"),
    CountryRecord::new("VE", "Venezuela", "Caracas", "🇻🇪"),
    CountryRecord::new("VN", "Vietnam", "Hanoi", "🇻🇳"),
    CountryRecord::new("YE", "Yemen", "Sanaa", "🇾🇪"),
    CountryRecord::new("ZM", "Zambia", "Lusaka", "🇿🇲"),
    CountryRecord::new("ZW", "Zimbabwe", "Harare", "🇿🇼"),
];

pub(super) static CONTINENT_ASSIGNMENTS: &[(&str, Continent)] = &[
    ("AF", Continent::Asia),
    ("AL", Continent::Europe),
    ("DZ", Continent::Africa),
    ("AD", Continent::Europe),
    ("AO", Continent::Africa),
    ("AG", Continent::NorthAmerica),
    ("AR", Continent::SouthAmerica),
    ("AM", Continent::Asia),
    ("AU", Continent::Oceania),
    ("AT", Continent::Europe),
    ("AZ", Continent::Asia),
    ("BS", Continent::NorthAmerica),
    ("BH", Continent::Asia),
    ("BD", Continent::Asia),
    ("BB", Continent::NorthAmerica),
    ("BY", Continent::Europe),
    ("BE", Continent::Europe),
    ("BZ", Continent::NorthAmerica),
    ("BJ", Continent::Africa),
    ("BT", Continent::Asia),
    ("BO", Continent::SouthAmerica),
    ("BA", Continent::Europe),
    ("BW", Continent::Africa),
    ("BR", Continent::SouthAmerica),
    ("BN", Continent::Asia),
    ("BG", Continent::Europe),
    ("BF", Continent::Africa),
    ("BI", Continent::Africa),
    ("CV", Continent::Africa),
    ("KH", Continent::Asia),
    ("CM", Continent::Africa),
    ("CA", Continent::NorthAmerica),
    ("CF", Continent::Africa),
    ("TD", Continent::Africa),
    ("CL", Continent::SouthAmerica),
    ("CN", Continent::Asia),
    ("CO", Continent::SouthAmerica),
    ("KM", Continent::Africa),
    ("CG", Continent::Africa),
    ("CD", Continent::Africa),
    ("CR", Continent::NorthAmerica),
    ("CI", Continent::Africa),
    ("HR", Continent::Europe),
    ("CU", Continent::NorthAmerica),
    ("CY", Continent::Europe),
    ("CZ", Continent::Europe),
    ("DK", Continent::Europe),
    ("DJ", Continent::Africa),
    ("DM", Continent::NorthAmerica),
    ("DO", Continent::NorthAmerica),
    ("EC", Continent::SouthAmerica),
    ("EG", Continent::Africa),
    ("SV", Continent::NorthAmerica),
    ("GQ", Continent::Africa),
    ("ER", Continent::Africa),
    ("EE", Continent::Europe),
    ("SZ", Continent::Africa),
    ("ET", Continent::Africa),
    ("FJ", Continent::Oceania),
    ("FI", Continent::Europe),
    ("FR", Continent::Europe),
    ("GA", Continent::Africa),
    ("GM", Continent::Africa),
    ("GE", Continent::Asia),
    ("DE", Continent::Europe),
    ("GH", Continent::Africa),
    ("GR", Continent::Europe),
    ("GD", Continent::NorthAmerica),
    ("GT", Continent::NorthAmerica),
    ("GN", Continent::Africa),
    ("GW", Continent::Africa),
    ("GY", Continent::SouthAmerica),
    ("HT", Continent::NorthAmerica),
    ("HN", Continent::NorthAmerica),
    ("HU", Continent::Europe),
    ("IS", Continent::Europe),
    ("IN", Continent::Asia),
    ("ID", Continent::Asia),
    ("IR", Continent::Asia),
    ("IQ", Continent::Asia),
    ("IE", Continent::Europe),
    ("IL", Continent::Asia),
    ("IT", Continent::Europe),
    ("JM", Continent::NorthAmerica),
    ("JP", Continent::Asia),
    ("JO", Continent::Asia),
    ("KZ", Continent::Asia),
    ("KE", Continent::Africa),
    ("KI", Continent::Oceania),
    ("KP", Continent::Asia),
    ("KR", Continent::Asia),
    ("XK", Continent::Europe),
    ("KW", Continent::Asia),
    ("KG", Continent::Asia),
    ("LA", Continent::Asia),
    ("LV", Continent::Europe),
    ("LB", Continent::Asia),
    ("LS", Continent::Africa),
    ("LR", Continent::Africa),
    ("LY", Continent::Africa),
    ("LI", Continent::Europe),
    ("LT", Continent::Europe),
    ("LU", Continent::Europe),
    ("MG", Continent::Africa),
    ("MW", Continent::Africa),
    ("MY", Continent::Asia),
    ("MV", Continent::Asia),
    ("ML", Continent::Africa),
    ("MT", Continent::Europe),
    ("MH", Continent::Oceania),
    ("MR", Continent::Africa),
    ("MU", Continent::Africa),
    ("MX", Continent::NorthAmerica),
    ("FM", Continent::Oceania),
    ("MD", Continent::Europe),
    ("MC", Continent::Europe),
    ("MN", Continent::Asia),
    ("ME", Continent::Europe),
    ("MA", Continent::Africa),
    ("MZ", Continent::Africa),
    ("MM", Continent::Asia),
    ("NA", Continent::Africa),
    ("NR", Continent::Oceania),
    ("NP", Continent::Asia),
    ("NL", Continent::Europe),
    ("NZ", Continent::Oceania),
    ("NI", Continent::NorthAmerica),
    ("NE", Continent::Africa),
    ("NG", Continent::Africa),
    ("MK", Continent::Europe),
    ("NO", Continent::Europe),
    ("OM", Continent::Asia),
    ("PK", Continent::Asia),
    ("PW", Continent::Oceania),
    ("PS", Continent::Asia),
    ("PA", Continent::NorthAmerica),
    ("PG", Continent::Oceania),
    ("PY", Continent::SouthAmerica),
    ("PE", Continent::SouthAmerica),
    ("PH", Continent::Asia),
    ("PL", Continent::Europe),
    ("PT", Continent::Europe),
    ("QA", Continent::Asia),
    ("RO", Continent::Europe),
    ("RU", Continent::Europe),
    ("RW", Continent::Africa),
    ("KN", Continent::NorthAmerica),
    ("LC", Continent::NorthAmerica),
    ("VC", Continent::NorthAmerica),
    ("WS", Continent::Oceania),
    ("SM", Continent::Europe),
    ("ST", Continent::Africa),
    ("SA", Continent::Asia),
    ("SN", Continent::Africa),
    ("RS", Continent::Europe),
    ("SC", Continent::Africa),
    ("SL", Continent::Africa),
    ("SG", Continent::Asia),
    ("SK", Continent::Europe),
    ("SI", Continent::Europe),
    ("SB", Continent::Oceania),
    ("SO", Continent::Africa),
    ("ZA", Continent::Africa),
    ("SS", Continent::Africa),
    ("ES", Continent::Europe),
    ("LK", Continent::Asia),
    ("SD", Continent::Africa),
    ("SR", Continent::SouthAmerica),
    ("SE", Continent::Europe),
    ("CH", Continent::Europe),
    ("SY", Continent::Asia),
    ("TW", Continent::Asia),
    ("TJ", Continent::Asia),
    ("TZ", Continent::Africa),
    ("TH", Continent::Asia),
    ("TL", Continent::Asia),
    ("TG", Continent::Africa),
    ("TO", Continent::Oceania),
    ("TT", Continent::NorthAmerica),
    ("TN", Continent::Africa),
    ("TR", Continent::Asia),
    ("TM", Continent::Asia),
    ("TV", Continent::Oceania),
    ("UG", Continent::Africa),
    ("UA", Continent::Europe),
    ("AE", Continent::Asia),
    ("GB", Continent::Europe),
    ("US", Continent::NorthAmerica),
    ("UY", Continent::SouthAmerica),
    ("UZ", Continent::Asia),
    ("VU", Continent::Oceania),
    ("VA", Continent::Europe),
    ("VE", Continent::SouthAmerica),
    ("VN", Continent::Asia),
    ("YE", Continent::Asia),
    ("ZM", Continent::Africa),
    ("ZW", Continent::Africa),
];
