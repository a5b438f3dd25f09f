//! Display implementation for occurrence application messages.
//!
//! All user-facing text lives here, in Portuguese, matching the language of
//! the report templates. Messages carrying parameters interpolate them with
//! `format!`; the rest are fixed strings.
//!
//! ```rust
//! use occurrence::libs::messages::Message;
//!
//! assert_eq!(Message::ReportCopyFailed.to_string(), "Erro ao copiar texto");
//! assert_eq!(Message::TotalTime("2h 30m".into()).to_string(), "Tempo total da ocorrência: 2h 30m");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === FORM MESSAGES ===
            Message::PromptIncidentType => "Selecione o tipo de ocorrência".to_string(),
            Message::FormHeader(title) => title.clone(),
            Message::FormSubtitle => "Preencha os dados da ocorrência".to_string(),
            Message::FieldInvalid(label, error) => format!("{}: {}", label, error),
            Message::RequiredFieldsMissing => "Preencha todos os campos obrigatórios".to_string(),
            Message::TotalTime(duration) => format!("Tempo total da ocorrência: {}", duration),
            Message::ReviewHeader => "Confira os dados da ocorrência:".to_string(),
            Message::FieldsCleared => "Campos limpos com sucesso".to_string(),
            Message::PromptNewOccurrence => "Registrar uma nova ocorrência?".to_string(),
            Message::InputFileLoaded(path) => format!("Dados carregados de {}", path),

            // === REPORT MESSAGES ===
            Message::ReportHeader => "Texto da ocorrência:".to_string(),
            Message::ReportCopied => "Texto copiado para a área de transferência!".to_string(),
            Message::ReportCopyFailed => "Erro ao copiar texto".to_string(),

            // === FIELD TOOL MESSAGES ===
            Message::InvalidValue(value, error) => format!("'{}': {}", value, error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuração salva com sucesso".to_string(),
            Message::ConfigDeleted => "Configuração removida".to_string(),
            Message::ConfigFileNotFound => "Arquivo de configuração não encontrado".to_string(),
            Message::PromptGarageName => "Nome da garagem".to_string(),
            Message::PromptDefaultCcoDuty => "Plantão CCO padrão (opcional)".to_string(),
            Message::PromptClipboardCommand => "Comando da área de transferência (opcional, ex: xclip -selection clipboard)".to_string(),
        };

        write!(f, "{}", text)
    }
}
