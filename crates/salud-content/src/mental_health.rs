//! Mental-health content module: depression and anxiety disorders.

use salud_core::model::{ClinicalRelevance, ContentRecord};
use salud_core::module::ContentModule;

use crate::support::*;

pub const MENTAL_HEALTH_IDS: &[&str] = &[
    "condition-depresion-depression",
    "condition-ansiedad-anxiety",
];

pub fn mental_health_module() -> ContentModule {
    ContentModule::new("mental-health", vec![depression(), anxiety()])
}

fn depression() -> ContentRecord {
    condition(
        "condition-depresion-depression",
        "Major Depressive Disorder",
        "Trastorno Depresivo Mayor",
        &["Depresión", "Depression", "MDD"],
        vec![
            {
                let mut l = level(
                    1,
                    "La depresión es una enfermedad real que causa tristeza profunda o pérdida \
                     de interés por semanas; tiene tratamiento. | Depression is a real illness \
                     that causes deep sadness or loss of interest for weeks; it is treatable.",
                    "## Explicación\n\nTodos nos sentimos tristes a veces. La depresión es \
                     distinta: dura **dos semanas o más** y afecta el sueño, el apetito, la \
                     energía y las ganas de hacer cosas que antes disfrutaba.\n\nNo es debilidad \
                     ni falta de voluntad. La terapia, los medicamentos, o ambos, ayudan a la \
                     mayoría de las personas.\n\nSi tiene pensamientos de hacerse daño, busque \
                     ayuda de inmediato: llame o envíe un mensaje de texto al **988** (línea de \
                     crisis, disponible en español).\n\n---\n## Explanation\n\nEveryone feels \
                     sad sometimes. Depression is different: it lasts **two weeks or more** and \
                     affects sleep, appetite, energy, and interest in things you used to \
                     enjoy.\n\nIt is not weakness or lack of willpower. Therapy, medication, or \
                     both help most people.\n\nIf you have thoughts of hurting yourself, get \
                     help right away: call or text **988** (crisis line, Spanish available).",
                );
                l.key_terms = vec![
                    key_term(
                        "terapia / therapy",
                        "Tratamiento con un profesional de salud mental, hablando sobre \
                         pensamientos y conductas. | Treatment with a mental-health \
                         professional, talking through thoughts and behaviors.",
                    ),
                    key_term(
                        "antidepresivo / antidepressant",
                        "Medicina que ayuda a equilibrar las señales químicas del cerebro. | \
                         Medicine that helps balance the brain's chemical signals.",
                    ),
                ];
                l.patient_counseling_points = vec![
                    "Los antidepresivos tardan de 4 a 6 semanas en hacer efecto completo; no \
                     los suspenda solo. | Antidepressants take 4-6 weeks for full effect; do \
                     not stop them on your own."
                        .into(),
                    "Hable con alguien de confianza; la depresión se esconde en el silencio. | \
                     Talk to someone you trust; depression hides in silence."
                        .into(),
                ];
                l
            },
            {
                let mut l = level(
                    2,
                    "El diagnóstico DSM-5 requiere ≥5 síntomas por ≥2 semanas, incluyendo ánimo \
                     deprimido o anhedonia; primera línea: psicoterapia y/o ISRS. | DSM-5 \
                     diagnosis requires ≥5 symptoms for ≥2 weeks, including depressed mood or \
                     anhedonia; first line: psychotherapy and/or SSRIs.",
                    "## Explicación\n\nLos criterios abarcan ánimo, anhedonia, sueño, apetito, \
                     energía, concentración, culpa, agitación o enlentecimiento, e ideación \
                     suicida. **Siempre** evaluar riesgo suicida y descartar episodios \
                     maníacos, hipotiroidismo y efectos de sustancias.\n\nLa terapia \
                     cognitivo-conductual y los ISRS tienen eficacia comparable en depresión \
                     leve a moderada; la combinación es superior en la grave.\n\n---\n\
                     ## Explanation\n\nCriteria cover mood, anhedonia, sleep, appetite, energy, \
                     concentration, guilt, agitation or slowing, and suicidal ideation. \
                     **Always** assess suicide risk and rule out manic episodes, \
                     hypothyroidism, and substance effects.\n\nCognitive behavioral therapy and \
                     SSRIs have comparable efficacy in mild to moderate depression; the \
                     combination is superior in severe illness.",
                );
                l.key_terms = vec![key_term(
                    "anhedonia / anhedonia",
                    "Pérdida de la capacidad de sentir placer. | Loss of the ability to feel \
                     pleasure.",
                )];
                l.clinical_notes = vec![
                    "Tamizaje con PHQ-9; un ítem 9 positivo obliga a evaluar riesgo suicida. | \
                     Screen with PHQ-9; a positive item 9 mandates suicide risk assessment."
                        .into(),
                ];
                l
            },
        ],
        vec![related(
            "condition-ansiedad-anxiety",
            "Comorbilidad frecuente ansiedad-depresión / Frequent anxiety-depression comorbidity",
        )],
        vec![guideline(
            "ref-1",
            "Practice Guideline for the Treatment of Patients With Major Depressive Disorder",
            &["American Psychiatric Association"],
            "APA Publishing, 3rd ed.",
        )],
        tags(
            &["nervous"],
            &["mental-health", "psychiatry"],
            &[
                "depresión",
                "depression",
                "anhedonia",
                "ISRS",
                "SSRI",
                "PHQ-9",
                "salud mental",
                "mental health",
            ],
            ClinicalRelevance::High,
        ),
    )
}

fn anxiety() -> ContentRecord {
    condition(
        "condition-ansiedad-anxiety",
        "Generalized Anxiety Disorder",
        "Trastorno de Ansiedad Generalizada",
        &["Ansiedad", "Anxiety", "TAG", "GAD"],
        vec![
            {
                let mut l = level(
                    1,
                    "El trastorno de ansiedad generalizada es preocupación excesiva casi todos \
                     los días, difícil de controlar, por seis meses o más. | Generalized \
                     anxiety disorder is excessive worry most days, hard to control, for six \
                     months or more.",
                    "## Explicación\n\nLa ansiedad normal nos protege. En el trastorno de \
                     ansiedad, la preocupación es constante y desproporcionada, y viene con \
                     tensión muscular, problemas para dormir, irritabilidad y cansancio.\n\nLa \
                     respiración lenta, el ejercicio, la terapia y, a veces, los medicamentos \
                     reducen los síntomas de forma duradera.\n\n---\n## Explanation\n\nNormal \
                     anxiety protects us. In an anxiety disorder, worry is constant and out of \
                     proportion, and comes with muscle tension, sleep trouble, irritability, \
                     and fatigue.\n\nSlow breathing, exercise, therapy, and sometimes \
                     medication reduce symptoms durably.",
                );
                l.key_terms = vec![key_term(
                    "preocupación / worry",
                    "Pensamientos repetidos sobre cosas malas que podrían pasar. | Repeated \
                     thoughts about bad things that might happen.",
                )];
                l.patient_counseling_points = vec![
                    "Reduzca la cafeína; puede imitar y empeorar la ansiedad. | Cut back on \
                     caffeine; it can mimic and worsen anxiety."
                        .into(),
                ];
                l
            },
            {
                let mut l = level(
                    2,
                    "El TAG se diagnostica con preocupación excesiva ≥6 meses más síntomas \
                     somáticos; primera línea: TCC e ISRS/IRSN. | GAD is diagnosed with \
                     excessive worry ≥6 months plus somatic symptoms; first line: CBT and \
                     SSRIs/SNRIs.",
                    "## Explicación\n\nEl GAD-7 es el tamizaje estándar. Descartar \
                     hipertiroidismo, arritmias, abstinencia y exceso de cafeína. Las \
                     benzodiacepinas se evitan como tratamiento crónico por tolerancia y \
                     dependencia.\n\n---\n## Explanation\n\nThe GAD-7 is the standard screen. \
                     Rule out hyperthyroidism, arrhythmias, withdrawal, and caffeine excess. \
                     Benzodiazepines are avoided as chronic treatment because of tolerance and \
                     dependence.",
                );
                l.clinical_notes = vec![
                    "GAD-7 ≥10 sugiere ansiedad moderada; confirmar con entrevista clínica. | \
                     GAD-7 ≥10 suggests moderate anxiety; confirm with clinical interview."
                        .into(),
                ];
                l
            },
        ],
        vec![related(
            "condition-depresion-depression",
            "Comorbilidad frecuente depresión-ansiedad / Frequent depression-anxiety comorbidity",
        )],
        vec![guideline(
            "ref-1",
            "Generalized anxiety disorder and panic disorder in adults: management",
            &["National Institute for Health and Care Excellence"],
            "NICE Clinical Guideline CG113",
        )],
        tags(
            &["nervous"],
            &["mental-health", "psychiatry"],
            &[
                "ansiedad",
                "anxiety",
                "preocupación",
                "worry",
                "GAD-7",
                "TCC",
                "CBT",
            ],
            ClinicalRelevance::Medium,
        ),
    )
}
