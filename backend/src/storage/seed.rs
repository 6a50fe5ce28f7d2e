//! Demo records loaded into a fresh server so the UI has something to show.

use shared::{AnimalFields, CareFields};

pub fn demo_animals() -> Vec<AnimalFields> {
    vec![
        AnimalFields {
            name: "Simba".to_string(),
            description: "Leão adulto, líder do grupo".to_string(),
            birth_date: "2018-03-14".to_string(),
            species: "Leão".to_string(),
            habitat: "Savana".to_string(),
            origin_country: "Quênia".to_string(),
        },
        AnimalFields {
            name: "Tora".to_string(),
            description: String::new(),
            birth_date: "2020-11-02".to_string(),
            species: "Tigre".to_string(),
            habitat: "Floresta".to_string(),
            origin_country: "Índia".to_string(),
        },
        AnimalFields {
            name: "Pingo".to_string(),
            description: "Chegou do centro de reabilitação".to_string(),
            birth_date: "2021-07-21".to_string(),
            species: "Pinguim".to_string(),
            habitat: "Oceano".to_string(),
            origin_country: "Argentina".to_string(),
        },
    ]
}

pub fn demo_cares() -> Vec<CareFields> {
    vec![
        CareFields {
            care_name: "Alimentação".to_string(),
            description: "Carne fresca para os felinos".to_string(),
            frequency: "Diária".to_string(),
        },
        CareFields {
            care_name: "Vacinação".to_string(),
            description: String::new(),
            frequency: "Anual".to_string(),
        },
    ]
}
