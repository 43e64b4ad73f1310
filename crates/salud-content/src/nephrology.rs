//! Nephrology content module: chronic kidney disease, acute kidney injury,
//! and dialysis, cross-referenced as a cluster.

use salud_core::model::{ClinicalRelevance, ContentRecord, ExamRelevance};
use salud_core::module::ContentModule;

use crate::support::*;

pub const NEPHROLOGY_IDS: &[&str] = &[
    "condition-enfermedad-renal-cronica-ckd",
    "condition-lesion-renal-aguda-aki",
    "condition-dialisis-dialysis",
];

pub fn nephrology_module() -> ContentModule {
    ContentModule::new(
        "nephrology",
        vec![chronic_kidney_disease(), acute_kidney_injury(), dialysis()],
    )
}

fn chronic_kidney_disease() -> ContentRecord {
    let mut record = condition(
        "condition-enfermedad-renal-cronica-ckd",
        "Chronic Kidney Disease",
        "Enfermedad Renal Crónica",
        &["ERC", "CKD", "Insuficiencia Renal Crónica", "Chronic Renal Failure"],
        vec![
            {
                let mut l = level(
                    1,
                    "La enfermedad renal crónica significa que los riñones están dañados y no \
                     filtran la sangre como deberían. | Chronic kidney disease means the kidneys \
                     are damaged and do not filter blood the way they should.",
                    "## Explicación\n\nLos riñones limpian la sangre todos los días. Cuando están \
                     dañados por mucho tiempo (más de 3 meses), los desechos se acumulan en el \
                     cuerpo. Las causas más comunes son la **diabetes** y la **presión alta**.\n\n\
                     La enfermedad avanza en 5 etapas. En las primeras etapas no hay síntomas, \
                     por eso los análisis de sangre y orina son tan importantes.\n\n---\n\
                     ## Explanation\n\nYour kidneys clean your blood every day. When they are \
                     damaged for a long time (more than 3 months), waste builds up in the body. \
                     The most common causes are **diabetes** and **high blood pressure**.\n\n\
                     The disease progresses through 5 stages. In the early stages there are no \
                     symptoms, which is why blood and urine tests matter so much.",
                );
                l.key_terms = vec![
                    key_term(
                        "riñón / kidney",
                        "Órgano que filtra los desechos de la sangre. | Organ that filters waste \
                         from the blood.",
                    ),
                    key_term(
                        "etapa / stage",
                        "Nivel de avance de la enfermedad, del 1 al 5. | How far the disease has \
                         progressed, from 1 to 5.",
                    ),
                ];
                l.patient_counseling_points = vec![
                    "Controle su azúcar y su presión arterial. | Keep your blood sugar and blood \
                     pressure under control."
                        .into(),
                    "No tome antiinflamatorios (ibuprofeno, naproxeno) sin consultar a su médico. \
                     | Do not take anti-inflammatories (ibuprofen, naproxen) without asking your \
                     doctor."
                        .into(),
                ];
                l
            },
            {
                let mut l = level(
                    2,
                    "La ERC se clasifica por la tasa de filtración glomerular (TFG) y la \
                     albuminuria; el manejo busca frenar la progresión. | CKD is staged by \
                     glomerular filtration rate (GFR) and albuminuria; management aims to slow \
                     progression.",
                    "## Explicación\n\nLa **TFG estimada** mide cuánta sangre filtran los riñones \
                     por minuto. Etapa 1 es daño con TFG normal (≥90); etapa 5 (<15) es falla \
                     renal. La **albuminuria** (proteína en la orina) marca daño y riesgo \
                     cardiovascular.\n\nEl tratamiento incluye inhibidores de la ECA o ARA-II, \
                     inhibidores de SGLT2, control de la presión y de la glucosa, y evitar \
                     nefrotóxicos.\n\n---\n## Explanation\n\n**Estimated GFR** measures how much \
                     blood the kidneys filter per minute. Stage 1 is damage with normal GFR \
                     (≥90); stage 5 (<15) is kidney failure. **Albuminuria** (protein in the \
                     urine) marks damage and cardiovascular risk.\n\nTreatment includes ACE \
                     inhibitors or ARBs, SGLT2 inhibitors, blood pressure and glucose control, \
                     and avoiding nephrotoxins.",
                );
                l.key_terms = vec![
                    key_term(
                        "TFG / GFR",
                        "Tasa de filtración glomerular: volumen filtrado por minuto. | Glomerular \
                         filtration rate: volume filtered per minute.",
                    ),
                    key_term(
                        "albuminuria / albuminuria",
                        "Albúmina en la orina, señal de daño renal. | Albumin in the urine, a \
                         sign of kidney damage.",
                    ),
                ];
                l.clinical_notes = vec![
                    "Derivar a nefrología con TFG <30 o albuminuria severa. | Refer to nephrology \
                     at GFR <30 or severe albuminuria."
                        .into(),
                ];
                l
            },
        ],
        vec![
            related(
                "condition-lesion-renal-aguda-aki",
                "LRA como factor de riesgo para ERC / AKI as risk factor for CKD",
            ),
            related(
                "condition-dialisis-dialysis",
                "Diálisis para ERC etapa 5 / Dialysis for stage 5 CKD",
            ),
            see_also(
                "condition-hipertension-hypertension",
                "La hipertensión causa y acelera la ERC / Hypertension causes and accelerates CKD",
            ),
        ],
        vec![guideline(
            "ref-1",
            "KDIGO 2024 Clinical Practice Guideline for the Evaluation and Management of Chronic \
             Kidney Disease",
            &["Kidney Disease: Improving Global Outcomes (KDIGO) CKD Work Group"],
            "Kidney International 2024; 105(4S):S117-S314",
        )],
        tags(
            &["renal"],
            &["nephrology"],
            &[
                "enfermedad renal crónica",
                "chronic kidney disease",
                "TFG",
                "GFR",
                "albuminuria",
                "diabetes",
                "hipertensión",
                "hypertension",
            ],
            ClinicalRelevance::High,
        ),
    );
    record.tags.exam_relevance = Some(ExamRelevance {
        usmle: true,
        nbme: true,
        shelf: vec!["medicine".into(), "family-medicine".into()],
    });
    record
}

fn acute_kidney_injury() -> ContentRecord {
    condition(
        "condition-lesion-renal-aguda-aki",
        "Acute Kidney Injury",
        "Lesión Renal Aguda",
        &["LRA", "AKI", "Falla Renal Aguda", "Acute Renal Failure"],
        vec![
            {
                let mut l = level(
                    1,
                    "La lesión renal aguda es cuando los riñones dejan de funcionar de repente, \
                     en horas o días; muchas veces es reversible. | Acute kidney injury is when \
                     the kidneys suddenly stop working, over hours or days; it is often \
                     reversible.",
                    "## Explicación\n\nA diferencia de la enfermedad crónica, la lesión renal \
                     aguda aparece rápido. Las causas comunes son deshidratación severa, \
                     infecciones graves, algunos medicamentos y obstrucciones del flujo de \
                     orina.\n\nCon tratamiento a tiempo, los riñones suelen recuperarse.\n\n---\n\
                     ## Explanation\n\nUnlike chronic disease, acute kidney injury comes on \
                     fast. Common causes are severe dehydration, serious infections, some \
                     medicines, and blockages of urine flow.\n\nWith timely treatment, the \
                     kidneys usually recover.",
                );
                l.key_terms = vec![key_term(
                    "deshidratación / dehydration",
                    "Falta de líquidos en el cuerpo. | Not enough fluid in the body.",
                )];
                l.patient_counseling_points = vec![
                    "Beba suficiente líquido cuando esté enfermo con vómitos o diarrea. | Drink \
                     enough fluids when you are sick with vomiting or diarrhea."
                        .into(),
                ];
                l
            },
            {
                let mut l = level(
                    2,
                    "La LRA se clasifica en prerrenal, intrínseca y postrenal, y se estadifica \
                     por creatinina y diuresis (criterios KDIGO). | AKI is classified as \
                     prerenal, intrinsic, and postrenal, and staged by creatinine and urine \
                     output (KDIGO criteria).",
                    "## Explicación\n\n**Prerrenal**: hipoperfusión (hipovolemia, falla \
                     cardíaca). **Intrínseca**: daño del parénquima (necrosis tubular aguda, \
                     glomerulonefritis, nefrotóxicos). **Postrenal**: obstrucción.\n\nLos \
                     criterios KDIGO usan el aumento de creatinina sérica y la caída de la \
                     diuresis para las etapas 1-3.\n\n---\n## Explanation\n\n**Prerenal**: \
                     hypoperfusion (hypovolemia, heart failure). **Intrinsic**: parenchymal \
                     damage (acute tubular necrosis, glomerulonephritis, nephrotoxins). \
                     **Postrenal**: obstruction.\n\nKDIGO criteria use the rise in serum \
                     creatinine and the fall in urine output for stages 1-3.",
                );
                l.key_terms = vec![
                    key_term(
                        "creatinina / creatinine",
                        "Desecho muscular que sube cuando los riñones fallan. | Muscle waste \
                         product that rises when kidneys fail.",
                    ),
                    key_term(
                        "necrosis tubular aguda / acute tubular necrosis",
                        "Daño de las células de los túbulos renales, causa intrínseca más común. \
                         | Damage to kidney tubule cells, the most common intrinsic cause.",
                    ),
                ];
                l
            },
        ],
        vec![
            related(
                "condition-enfermedad-renal-cronica-ckd",
                "Transición LRA-a-ERC / AKI-to-CKD transition",
            ),
            related(
                "condition-dialisis-dialysis",
                "Diálisis para LRA severa / Dialysis for severe AKI",
            ),
        ],
        vec![guideline(
            "ref-1",
            "KDIGO Clinical Practice Guideline for Acute Kidney Injury",
            &["Kidney Disease: Improving Global Outcomes (KDIGO) AKI Work Group"],
            "Kidney International Supplements 2012; 2:1-138",
        )],
        tags(
            &["renal"],
            &["nephrology", "critical-care"],
            &[
                "lesión renal aguda",
                "acute kidney injury",
                "creatinina",
                "creatinine",
                "KDIGO",
                "necrosis tubular",
            ],
            ClinicalRelevance::Critical,
        ),
    )
}

fn dialysis() -> ContentRecord {
    condition(
        "condition-dialisis-dialysis",
        "Dialysis",
        "Diálisis",
        &[
            "Hemodiálisis",
            "Hemodialysis",
            "Diálisis Peritoneal",
            "Peritoneal Dialysis",
            "RRT",
        ],
        vec![
            {
                let mut l = level(
                    1,
                    "La diálisis es un tratamiento que limpia la sangre cuando los riñones ya no \
                     pueden hacerlo por sí mismos. | Dialysis is a treatment that cleans the \
                     blood when the kidneys can no longer do it on their own.",
                    "## Explicación\n\nPiensa en la diálisis como un riñón artificial. Hay dos \
                     tipos: la **hemodiálisis**, donde una máquina filtra la sangre (3 veces por \
                     semana en un centro), y la **diálisis peritoneal**, que usa el abdomen como \
                     filtro y puede hacerse en casa.\n\n---\n## Explanation\n\nThink of dialysis \
                     as an artificial kidney. There are two types: **hemodialysis**, where a \
                     machine filters the blood (3 times a week at a center), and **peritoneal \
                     dialysis**, which uses the belly as a filter and can be done at home.",
                );
                l.key_terms = vec![
                    key_term(
                        "hemodiálisis / hemodialysis",
                        "La sangre se filtra fuera del cuerpo a través de una máquina. | Blood \
                         is filtered outside the body through a machine.",
                    ),
                    key_term(
                        "fístula / fistula",
                        "Conexión creada por cirugía entre una arteria y una vena para el acceso. \
                         | Surgically created connection between an artery and a vein for access.",
                    ),
                ];
                l.analogies = vec![
                    "La diálisis funciona como una lavadora para tu sangre. | Dialysis works like \
                     a washing machine for your blood."
                        .into(),
                ];
                l.patient_counseling_points = vec![
                    "Asista a todas sus citas de diálisis; faltar es peligroso. | Attend all your \
                     dialysis appointments; missing them is dangerous."
                        .into(),
                    "Cuide su acceso: no permita tomas de presión en ese brazo. | Protect your \
                     access: no blood pressure checks on that arm."
                        .into(),
                ];
                l
            },
            {
                let mut l = level(
                    2,
                    "La hemodiálisis y la diálisis peritoneal difieren en mecanismo, acceso y \
                     complicaciones; la elección depende del paciente. | Hemodialysis and \
                     peritoneal dialysis differ in mechanism, access, and complications; the \
                     choice depends on the patient.",
                    "## Explicación\n\nLa diálisis funciona por **difusión** (los solutos cruzan \
                     una membrana semipermeable) y **ultrafiltración** (el agua se retira por \
                     presión). La fístula arteriovenosa es el acceso preferido para \
                     hemodiálisis; la peritonitis es la complicación clave de la diálisis \
                     peritoneal.\n\n---\n## Explanation\n\nDialysis works by **diffusion** \
                     (solutes cross a semipermeable membrane) and **ultrafiltration** (water is \
                     removed by pressure). The arteriovenous fistula is the preferred \
                     hemodialysis access; peritonitis is the key peritoneal dialysis \
                     complication.",
                );
                l.clinical_notes = vec![
                    "La adecuación de hemodiálisis se monitoriza con Kt/V. | Hemodialysis \
                     adequacy is monitored with Kt/V."
                        .into(),
                ];
                l
            },
        ],
        vec![
            related(
                "condition-enfermedad-renal-cronica-ckd",
                "ERC como indicación para diálisis / CKD as indication for dialysis",
            ),
            related(
                "condition-lesion-renal-aguda-aki",
                "LRA que requiere diálisis / AKI requiring dialysis",
            ),
        ],
        vec![
            guideline(
                "ref-1",
                "KDOQI Clinical Practice Guideline for Hemodialysis Adequacy: 2015 Update",
                &["National Kidney Foundation"],
                "American Journal of Kidney Diseases 2015; 66(5):884-930",
            ),
            textbook(
                "ref-2",
                "Handbook of Dialysis",
                &["Daugirdas JT", "Blake PG", "Ing TS"],
                "Wolters Kluwer, 5th ed.",
            ),
        ],
        tags(
            &["renal"],
            &["nephrology"],
            &[
                "diálisis",
                "dialysis",
                "hemodiálisis",
                "hemodialysis",
                "diálisis peritoneal",
                "peritoneal dialysis",
                "fístula",
                "Kt/V",
            ],
            ClinicalRelevance::High,
        ),
    )
}
