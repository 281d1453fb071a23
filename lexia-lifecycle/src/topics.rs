//! Static catalog of health-surveillance topics. Keys double as category
//! tags on concepts and as context file names (`{key}.txt`).

use rand::Rng;

use lexia_core::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub key: &'static str,
    pub description: &'static str,
}

pub const TOPICS: &[Topic] = &[
    // Symptoms by body system
    Topic { key: "symptoms_general", description: "General systemic symptoms (fatigue, malaise, weakness, weight changes, appetite changes, night sweats)" },
    Topic { key: "symptoms_fever_temperature", description: "Fever, high temperature, hypothermia, chills, shivering" },
    Topic { key: "symptoms_respiratory_upper", description: "Upper respiratory symptoms (runny nose, nasal congestion, sneezing, sore throat, hoarseness)" },
    Topic { key: "symptoms_respiratory_lower", description: "Lower respiratory symptoms (cough, shortness of breath, wheezing, chest tightness)" },
    Topic { key: "symptoms_cardiovascular", description: "Cardiovascular symptoms (chest pain, palpitations, irregular heartbeat, edema, fainting)" },
    Topic { key: "symptoms_gastrointestinal_upper", description: "Upper GI symptoms (nausea, vomiting, heartburn, indigestion, difficulty swallowing)" },
    Topic { key: "symptoms_gastrointestinal_lower", description: "Lower GI symptoms (diarrhea, constipation, abdominal pain, bloating, rectal bleeding, jaundice)" },
    Topic { key: "symptoms_neurological", description: "Neurological symptoms (headache, migraine, dizziness, confusion, seizures, numbness, loss of smell or taste)" },
    Topic { key: "symptoms_musculoskeletal", description: "Musculoskeletal symptoms (muscle aches, joint pain, back pain, stiffness, cramps)" },
    Topic { key: "symptoms_skin_integumentary", description: "Skin symptoms (rash, hives, itching, lesions, blisters, discoloration, hair loss)" },
    Topic { key: "symptoms_eyes_vision", description: "Eye and vision symptoms (red eyes, eye pain, blurred vision, light sensitivity, discharge)" },
    Topic { key: "symptoms_urinary_renal", description: "Urinary and kidney symptoms (painful urination, frequency, blood in urine, flank pain)" },
    // Communicable diseases
    Topic { key: "disease_covid19", description: "COVID-19, variants, Long COVID" },
    Topic { key: "disease_influenza_seasonal", description: "Seasonal influenza, strains (H1N1, H3N2, B)" },
    Topic { key: "disease_rsv", description: "Respiratory syncytial virus, common in children and the elderly" },
    Topic { key: "disease_measles", description: "Measles virus, outbreaks, complications" },
    Topic { key: "disease_tuberculosis", description: "Tuberculosis, pulmonary and extrapulmonary, drug-resistant TB" },
    Topic { key: "disease_pertussis", description: "Pertussis (whooping cough)" },
    Topic { key: "disease_norovirus", description: "Norovirus, acute gastroenteritis" },
    Topic { key: "disease_salmonellosis", description: "Salmonella infection, food poisoning" },
    Topic { key: "disease_cholera", description: "Cholera" },
    Topic { key: "disease_hepatitis_a_e", description: "Hepatitis A and Hepatitis E, food and waterborne" },
    Topic { key: "disease_west_nile_virus", description: "West Nile virus, mosquito-borne" },
    Topic { key: "disease_dengue", description: "Dengue fever, mosquito-borne" },
    Topic { key: "disease_leishmaniasis", description: "Leishmaniasis, cutaneous and visceral, sandfly-borne" },
    Topic { key: "disease_rabies", description: "Rabies, animal bites" },
    Topic { key: "disease_brucellosis", description: "Brucellosis, contact with infected animals or products" },
    Topic { key: "disease_meningitis_bacterial", description: "Bacterial meningitis" },
    // Transmission classes
    Topic { key: "transmission_airborne_droplet", description: "Diseases spread through air or respiratory droplets" },
    Topic { key: "transmission_foodborne", description: "Illnesses caused by contaminated food" },
    Topic { key: "transmission_waterborne", description: "Illnesses caused by contaminated water" },
    Topic { key: "transmission_vector_mosquito", description: "Diseases spread by mosquitoes" },
    Topic { key: "transmission_zoonotic", description: "Diseases spread from animals to humans" },
    // Public health actions and discourse
    Topic { key: "public_health_surveillance_reporting", description: "Official disease surveillance data, case counts, outbreak investigations" },
    Topic { key: "public_health_vaccination_general", description: "General discussions about vaccines and immunization schedules" },
    Topic { key: "public_health_vaccination_hesitancy", description: "Vaccine hesitancy, safety concerns, misinformation" },
    Topic { key: "public_health_screening_testing_access", description: "Availability, cost and location of diagnostic tests" },
    Topic { key: "public_health_quarantine_isolation", description: "Quarantine and isolation policies, duration, compliance" },
    // Health system
    Topic { key: "health_system_capacity_hospitals", description: "Hospital bed availability, emergency room overcrowding, wait times" },
    Topic { key: "health_system_pharmaceuticals_supply", description: "Medication shortages, drug availability, vaccine supply chain issues" },
    // Environment and society
    Topic { key: "env_air_quality", description: "Air pollution concerns and impact on respiratory health" },
    Topic { key: "env_water_quality", description: "Drinking water safety, water pollution, access to clean water" },
    // Mental health
    Topic { key: "mental_health_symptoms_anxiety", description: "Anxiety, worry, nervousness, panic attacks" },
    Topic { key: "mental_health_symptoms_depression", description: "Depression, sadness, hopelessness, loss of interest" },
    // Emerging issues
    Topic { key: "emerging_unexplained_clusters", description: "Reports of unusual clusters of illness without a clear cause" },
    Topic { key: "emerging_antimicrobial_resistance", description: "Antimicrobial resistance, drug-resistant infections" },
];

/// Description for a known topic key.
pub fn topic_description(key: &str) -> Option<&'static str> {
    TOPICS
        .iter()
        .find(|t| t.key == key)
        .map(|t| t.description)
}

/// Uniformly random topic from the catalog.
pub fn random_topic() -> &'static Topic {
    let idx = rand::thread_rng().gen_range(0..TOPICS.len());
    &TOPICS[idx]
}

/// Uniformly random supported language.
pub fn random_language() -> Language {
    let idx = rand::thread_rng().gen_range(0..Language::ALL.len());
    Language::ALL[idx]
}
