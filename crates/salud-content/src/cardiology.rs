//! Cardiology content module: heart failure and hypertension.

use salud_core::model::{ClinicalRelevance, ContentRecord, ExamRelevance, MediaRef, MediaType};
use salud_core::module::ContentModule;

use crate::support::*;

pub const CARDIOLOGY_IDS: &[&str] = &[
    "condition-insuficiencia-cardiaca-heart-failure",
    "condition-hipertension-hypertension",
];

pub fn cardiology_module() -> ContentModule {
    ContentModule::new("cardiology", vec![heart_failure(), hypertension()])
}

fn heart_failure() -> ContentRecord {
    let mut record = condition(
        "condition-insuficiencia-cardiaca-heart-failure",
        "Heart Failure",
        "Insuficiencia Cardíaca",
        &["IC", "HF", "Falla Cardíaca", "Congestive Heart Failure", "CHF"],
        vec![
            {
                let mut l = level(
                    1,
                    "La insuficiencia cardíaca significa que el corazón no bombea sangre con la \
                     fuerza que el cuerpo necesita. | Heart failure means the heart does not \
                     pump blood as strongly as the body needs.",
                    "## Explicación\n\nEl corazón es una bomba. Cuando se debilita o se pone \
                     rígido, la sangre se acumula y el líquido se filtra a los pulmones y las \
                     piernas. Por eso aparecen **falta de aire**, **hinchazón en los tobillos** \
                     y **cansancio**.\n\nNo significa que el corazón se haya detenido: con \
                     medicinas, dieta baja en sal y control del peso, muchas personas viven bien \
                     por años.\n\n---\n## Explanation\n\nThe heart is a pump. When it weakens \
                     or stiffens, blood backs up and fluid leaks into the lungs and legs. That \
                     is why **shortness of breath**, **ankle swelling**, and **tiredness** \
                     appear.\n\nIt does not mean the heart has stopped: with medicines, a \
                     low-salt diet, and weight checks, many people live well for years.",
                );
                l.key_terms = vec![
                    key_term(
                        "bomba / pump",
                        "El trabajo del corazón: mover la sangre por el cuerpo. | The heart's \
                         job: moving blood through the body.",
                    ),
                    key_term(
                        "edema / edema",
                        "Hinchazón por líquido acumulado. | Swelling from built-up fluid.",
                    ),
                ];
                l.analogies = vec![
                    "Un corazón con insuficiencia es como una bomba de agua gastada: sigue \
                     funcionando, pero mueve menos agua y el tanque se desborda. | A failing \
                     heart is like a worn water pump: it still runs, but moves less water and \
                     the tank overflows."
                        .into(),
                ];
                l.patient_counseling_points = vec![
                    "Pésese todos los días; avise si sube más de 2 kg en 3 días. | Weigh \
                     yourself daily; call if you gain more than 2 kg in 3 days."
                        .into(),
                    "Limite la sal y tome sus medicinas aunque se sienta bien. | Limit salt and \
                     take your medicines even when you feel well."
                        .into(),
                ];
                l
            },
            {
                let mut l = level(
                    2,
                    "La IC se clasifica por fracción de eyección (reducida o preservada) y por \
                     clase funcional NYHA; el tratamiento con cuatro pilares reduce mortalidad. \
                     | HF is classified by ejection fraction (reduced or preserved) and NYHA \
                     functional class; four-pillar therapy reduces mortality.",
                    "## Explicación\n\nLa **fracción de eyección (FE)** separa la IC con FE \
                     reducida (≤40%) de la preservada (≥50%). La clase **NYHA** (I-IV) mide la \
                     limitación funcional.\n\nPara la FE reducida, los cuatro pilares son: \
                     IECA/ARNI, betabloqueantes, antagonistas de mineralocorticoides e \
                     inhibidores de SGLT2.\n\n---\n## Explanation\n\n**Ejection fraction (EF)** \
                     separates HF with reduced EF (≤40%) from preserved EF (≥50%). **NYHA** \
                     class (I-IV) measures functional limitation.\n\nFor reduced EF, the four \
                     pillars are: ACEI/ARNI, beta-blockers, mineralocorticoid antagonists, and \
                     SGLT2 inhibitors.",
                );
                l.key_terms = vec![key_term(
                    "fracción de eyección / ejection fraction",
                    "Porcentaje de sangre que el ventrículo expulsa en cada latido. | Percentage \
                     of blood the ventricle ejects with each beat.",
                )];
                l.clinical_notes = vec![
                    "El BNP/NT-proBNP apoya el diagnóstico y el pronóstico. | BNP/NT-proBNP \
                     supports diagnosis and prognosis."
                        .into(),
                ];
                l
            },
        ],
        vec![
            related(
                "condition-hipertension-hypertension",
                "La hipertensión es la causa prevenible más común de IC / Hypertension is the \
                 most common preventable cause of HF",
            ),
            see_also(
                "condition-enfermedad-renal-cronica-ckd",
                "Síndrome cardiorrenal / Cardiorenal syndrome",
            ),
        ],
        vec![guideline(
            "ref-1",
            "2022 AHA/ACC/HFSA Guideline for the Management of Heart Failure",
            &["Heidenreich PA", "Bozkurt B", "Aguilar D"],
            "Circulation 2022; 145(18):e895-e1032",
        )],
        tags(
            &["cardiovascular"],
            &["cardiology"],
            &[
                "insuficiencia cardíaca",
                "heart failure",
                "fracción de eyección",
                "ejection fraction",
                "NYHA",
                "edema",
                "disnea",
            ],
            ClinicalRelevance::Critical,
        ),
    );
    record.media = vec![MediaRef {
        id: "heart-failure-pathophysiology".into(),
        media_type: MediaType::Diagram,
        filename: "heart-failure-forward-backward-failure.svg".into(),
        title: "Forward and Backward Failure".into(),
        description: Some("How reduced output and congestion produce the symptom pattern".into()),
    }];
    record.tags.exam_relevance = Some(ExamRelevance {
        usmle: true,
        nbme: true,
        shelf: vec!["medicine".into(), "emergency".into()],
    });
    record
}

fn hypertension() -> ContentRecord {
    condition(
        "condition-hipertension-hypertension",
        "Hypertension",
        "Hipertensión",
        &["HTA", "Presión Alta", "High Blood Pressure", "HTN"],
        vec![
            {
                let mut l = level(
                    1,
                    "La hipertensión es la presión de la sangre constantemente alta contra las \
                     paredes de las arterias; casi nunca da síntomas. | Hypertension is blood \
                     pressure that stays too high against artery walls; it almost never causes \
                     symptoms.",
                    "## Explicación\n\nLa presión alta daña lentamente las arterias, el corazón, \
                     el cerebro, los riñones y los ojos. Se le llama «el asesino silencioso» \
                     porque no se siente.\n\nMedirse la presión con regularidad, comer con menos \
                     sal, moverse más y tomar las medicinas recetadas protege todos esos \
                     órganos.\n\n---\n## Explanation\n\nHigh blood pressure slowly damages the \
                     arteries, heart, brain, kidneys, and eyes. It is called \"the silent \
                     killer\" because you cannot feel it.\n\nChecking your pressure regularly, \
                     eating less salt, moving more, and taking prescribed medicines protects \
                     all of those organs.",
                );
                l.key_terms = vec![
                    key_term(
                        "presión arterial / blood pressure",
                        "La fuerza de la sangre contra las paredes de las arterias. | The force \
                         of blood against artery walls.",
                    ),
                    key_term(
                        "sistólica / systolic",
                        "El número de arriba: la presión cuando el corazón late. | The top \
                         number: pressure when the heart beats.",
                    ),
                ];
                l.patient_counseling_points = vec![
                    "Tómese la presión en casa, sentado y en reposo, y anote los valores. | \
                     Check your pressure at home, seated and rested, and write the numbers down."
                        .into(),
                ];
                l
            },
            {
                let mut l = level(
                    2,
                    "El diagnóstico requiere mediciones repetidas o monitoreo ambulatorio; el \
                     tratamiento combina cambios de estilo de vida y fármacos de primera línea. \
                     | Diagnosis requires repeated measurements or ambulatory monitoring; \
                     treatment combines lifestyle change and first-line drugs.",
                    "## Explicación\n\nSe confirma con promedios ≥130/80 mmHg (umbral ACC/AHA) \
                     en visitas separadas o con MAPA. Primera línea: tiazidas, IECA/ARA-II y \
                     calcioantagonistas. Buscar causas secundarias si el inicio es temprano o \
                     la presión es resistente.\n\n---\n## Explanation\n\nConfirmed with \
                     averages ≥130/80 mmHg (ACC/AHA threshold) on separate visits or with \
                     ambulatory monitoring. First line: thiazides, ACEI/ARBs, and calcium \
                     channel blockers. Look for secondary causes when onset is early or \
                     pressure is resistant.",
                );
                l.clinical_notes = vec![
                    "La hipertensión es el principal factor de riesgo modificable de ACV. | \
                     Hypertension is the leading modifiable stroke risk factor."
                        .into(),
                ];
                l
            },
        ],
        vec![
            related(
                "condition-insuficiencia-cardiaca-heart-failure",
                "La HTA no controlada progresa a IC / Uncontrolled HTN progresses to HF",
            ),
            related(
                "condition-enfermedad-renal-cronica-ckd",
                "Nefroesclerosis hipertensiva / Hypertensive nephrosclerosis",
            ),
        ],
        vec![guideline(
            "ref-1",
            "2017 ACC/AHA Guideline for the Prevention, Detection, Evaluation, and Management of \
             High Blood Pressure in Adults",
            &["Whelton PK", "Carey RM", "Aronow WS"],
            "Hypertension 2018; 71(6):e13-e115",
        )],
        tags(
            &["cardiovascular", "renal"],
            &["cardiology", "preventive-medicine"],
            &[
                "hipertensión",
                "hypertension",
                "presión arterial",
                "blood pressure",
                "sistólica",
                "diastólica",
                "MAPA",
            ],
            ClinicalRelevance::High,
        ),
    )
}
