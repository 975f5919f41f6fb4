//! Swedish region display names, sorted by region code

pub(super) static NAMES: &[(&str, &str)] = &[
    ("AD", "Andorra"),
    ("AE", "Förenade Arabemiraten"),
    ("AF", "Afghanistan"),
    ("AG", "Antigua och Barbuda"),
    ("AL", "Albanien"),
    ("AM", "Armenien"),
    ("AO", "Angola"),
    ("AR", "Argentina"),
    ("AT", "Österrike"),
    ("AU", "Australien"),
    ("AZ", "Azerbajdzjan"),
    ("BA", "Bosnien och Hercegovina"),
    ("BB", "Barbados"),
    ("BD", "Bangladesh"),
    ("BE", "Belgien"),
    ("BF", "Burkina Faso"),
    ("BG", "Bulgarien"),
    ("BH", "Bahrain"),
    ("BI", "Burundi"),
    ("BJ", "Benin"),
    ("BN", "Brunei"),
    ("BO", "Bolivia"),
    ("BR", "Brasilien"),
    ("BS", "Bahamas"),
    ("BT", "Bhutan"),
    ("BW", "Botswana"),
    ("BY", "Belarus"),
    ("BZ", "Belize"),
    ("CA", "Kanada"),
    ("CD", "Kongo-Kinshasa"),
    ("CF", "Centralafrikanska republiken"),
    ("CG", "Kongo-Brazzaville"),
    ("CH", "Schweiz"),
    ("CI", "Elfenbenskusten"),
    ("CL", "Chile"),
    ("CM", "Kamerun"),
    ("CN", "Kina"),
    ("CO", "Colombia"),
    ("CR", "Costa Rica"),
    ("CU", "Kuba"),
    ("CV", "Kap Verde"),
    ("CY", "Cypern"),
    ("CZ", "Tjeckien"),
    ("DE", "Tyskland"),
    ("DJ", "Djibouti"),
    ("DK", "Danmark"),
    ("DM", "Dominica"),
    ("DO", "Dominikanska republiken"),
    ("DZ", "Algeriet"),
    ("EC", "Ecuador"),
    ("EE", "Estland"),
    ("EG", "Egypten"),
    ("ER", "Eritrea"),
    ("ES", "Spanien"),
    ("ET", "Etiopien"),
    ("FI", "Finland"),
    ("FJ", "Fiji"),
    ("FM", "Mikronesien"),
    ("FR", "Frankrike"),
    ("GA", "Gabon"),
    ("GB", "Storbritannien"),
    ("GD", "Grenada"),
    ("GE", "Georgien"),
    ("GH", "Ghana"),
    ("GM", "Gambia"),
    ("GN", "Guinea"),
    ("GQ", "Ekvatorialguinea"),
    ("GR", "Grekland"),
    ("GT", "Guatemala"),
    ("GW", "Guinea-Bissau"),
    ("GY", "Guyana"),
    ("HN", "Honduras"),
    ("HR", "Kroatien"),
    ("HT", "Haiti"),
    ("HU", "Ungern"),
    ("ID", "Indonesien"),
    ("IE", "Irland"),
    ("IL", "Israel"),
    ("IN", "Indien"),
    ("IQ", "Irak"),
    ("IR", "Iran"),
    ("IS", "Island"),
    ("IT", "Italien"),
    ("JM", "Jamaica"),
    ("JO", "Jordanien"),
    ("JP", "Japan"),
    ("KE", "Kenya"),
    ("KG", "Kirgizistan"),
    ("KH", "Kambodja"),
    ("KI", "Kiribati"),
    ("KM", "Komorerna"),
    ("KN", "S:t Kitts och Nevis"),
    ("KP", "Nordkorea"),
    ("KR", "Sydkorea"),
    ("KW", "Kuwait"),
    ("KZ", "Kazakstan"),
    ("LA", "Laos"),
    ("LB", "Libanon"),
    ("LC", "S:t Lucia"),
    ("LI", "Liechtenstein"),
    ("LK", "Sri Lanka"),
    ("LR", "Liberia"),
    ("LS", "Lesotho"),
    ("LT", "Litauen"),
    ("LU", "Luxemburg"),
    ("LV", "Lettland"),
    ("LY", "Libyen"),
    ("MA", "Marocko"),
    ("MC", "Monaco"),
    ("MD", "Moldavien"),
    ("ME", "Montenegro"),
    ("MG", "Madagaskar"),
    ("MH", "Marshallöarna"),
    ("MK", "Nordmakedonien"),
    ("ML", "Mali"),
    ("MM", "Myanmar (Burma)"),
    ("MN", "Mongoliet"),
    ("MR", "Mauretanien"),
    ("MT", "Malta"),
    ("MU", "Mauritius"),
    ("MV", "Maldiverna"),
    ("MW", "Malawi"),
    ("MX", "Mexiko"),
    ("MY", "Malaysia"),
    ("MZ", "Moçambique"),
    ("NA", "Namibia"),
    ("NE", "Niger"),
    ("NG", "Nigeria"),
    ("NI", "Nicaragua"),
    ("NL", "Nederländerna"),
    ("NO", "Norge"),
    ("NP", "Nepal"),
    ("NR", "Nauru"),
    ("NZ", "Nya Zeeland"),
    ("OM", "Oman"),
    ("PA", "Panama"),
    ("PE", "Peru"),
    ("PG", "Papua Nya Guinea"),
    ("PH", "Filippinerna"),
    ("PK", "Pakistan"),
    ("PL", "Polen"),
    ("PS", "Palestinska territorierna"),
    ("PT", "Portugal"),
    ("PW", "Palau"),
    ("PY", "Paraguay"),
    ("QA", "Qatar"),
    ("RO", "Rumänien"),
    ("RS", "Serbien"),
    ("RU", "Ryssland"),
    ("RW", "Rwanda"),
    ("SA", "Saudiarabien"),
    ("SB", "Salomonöarna"),
    ("SC", "Seychellerna"),
    ("SD", "Sudan"),
    ("SE", "Sverige"),
    ("SG", "Singapore"),
    ("SI", "Slovenien"),
    ("SK", "Slovakien"),
    ("SL", "Sierra Leone"),
    ("SM", "San Marino"),
    ("SN", "Senegal"),
    ("SO", "Somalia"),
    ("SR", "Surinam"),
    ("SS", "Sydsudan"),
    ("ST", "São Tomé och Príncipe"),
    ("SV", "El Salvador"),
    ("SY", "Syrien"),
    ("SZ", "Eswatini"),
    ("TD", "Tchad"),
    ("TG", "Togo"),
    ("TH", "Thailand"),
    ("TJ", "Tadzjikistan"),
    ("TL", "Östtimor"),
    ("TM", "Turkmenistan"),
    ("TN", "Tunisien"),
    ("TO", "Tonga"),
    ("TR", "Turkiet"),
    ("TT", "Trinidad och Tobago"),
    ("TV", "Tuvalu"),
    ("TW", "Taiwan"),
    ("TZ", "Tanzania"),
    ("UA", "Ukraina"),
    ("UG", "Uganda"),
    ("US", "USA"),
    ("UY", "Uruguay"),
    ("UZ", "Uzbekistan"),
    ("VA", "Vatikanstaten"),
    ("VC", "S:t Vincent och Grenadinerna"),
    ("VE", "Venezuela"),
    ("VN", "Vietnam"),
    ("VU", "Vanuatu"),
    ("WS", "Samoa"),
    ("YE", "Jemen"),
    ("ZA", "Sydafrika"),
    ("ZM", "Zambia"),
    ("ZW", "Zimbabwe"),
];
