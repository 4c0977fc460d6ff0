/// Shown in the EC0217 lobby whenever a question set could not be produced.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Hubo un error al generar las preguntas. Por favor, intenta de nuevo.";

/// EC0201 wording for the same failure.
pub const CONNECTION_FAILED_MESSAGE: &str =
    "Error al conectar con la IA. Verifica tu API Key o conexión.";

pub const OPTIONS_PER_QUESTION: usize = 4;

pub const DEFAULT_QUESTION_COUNT: usize = 20;

pub const EC0217_PROMPT: &str = "Genera un examen de {count} preguntas de opción múltiple para la certificación CONOCER EC0217.01 (Impartición de cursos de formación del capital humano).

REQUISITOS CRÍTICOS DE REDACCIÓN:
1. Estilo STPS: Utiliza un lenguaje técnico, formal y complejo. Evita preguntas directas y simples.
2. Casos Prácticos: Al menos el 50% de las preguntas deben presentar situaciones o escenarios donde el instructor debe tomar una decisión basada en el estándar.
3. Distractores: Las opciones incorrectas deben ser verosímiles y estar relacionadas con el tema, para evaluar la comprensión real y no solo la memoria.
4. Cobertura: Distribuye las preguntas equitativamente entre los siguientes temas:
   - Sistema Nacional de Competencias y el CONOCER (SNC, OC, ECE, Red de Prestadores).
   - Dominios de Aprendizaje (Bloom: Cognitivo, Psicomotriz, Afectivo; UNESCO: Saber, Saber Hacer, Saber Ser).
   - Teorías de Aprendizaje (Constructivismo, Conductismo, Cognitivismo, Humanismo).
   - Estilos de Aprendizaje (Ned Herrmann, Kolb, Paul MacLean, Gardner, VAK).
   - Herramientas de Conducción y Roles de Grupo (El Contreras, El Experto, El Silencioso, etc.).
   - Redacción de Objetivos (Sujeto, Acción, Condición de Operación).
   - Técnicas Instruccionales (Expositiva, Demostrativa, Diálogo-Discusión).
   - Evaluación (Momentos: Diagnóstica, Formativa, Sumativa; Instrumentos: Lista de Cotejo, Guía de Observación, Cuestionario).
   - Elaboración de Productos (Carta Descriptiva).

Cada pregunta debe tener exactamente 4 opciones.";

pub const EC0201_PROMPT: &str = "Genera un examen de {count} preguntas de opción múltiple para la certificación CONOCER EC0201.01 (Diseño de cursos).

REQUISITOS:
1. Lenguaje Técnico: Sujeto, Acción, Condición de Operación, Taxonomía de Bloom.
2. Complejidad: Casos de análisis sobre Carta Descriptiva, Manuales e Instrumentos de Evaluación.
3. Estilo: Formal, tipo STPS.
4. Formato: 4 opciones por pregunta.

Estructura JSON: array de objetos con topic, statement, options, correctAnswerIndex (0-3), explanation.";

/// Substitutes the question count into a prompt template.
pub fn render_prompt(template: &str, question_count: usize) -> String {
    template.replace("{count}", &question_count.to_string())
}
