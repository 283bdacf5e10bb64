use crate::system::locale::{primary_subtag, system_language};

/// 화면 표시 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Portuguese,
    English,
    Spanish,
}

impl Language {
    /// 메뉴에 표시되는 순서
    pub const ALL: [Language; 3] = [Language::Portuguese, Language::English, Language::Spanish];

    pub fn code(self) -> &'static str {
        match self {
            Language::Portuguese => "pt",
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// 저장된 코드 → 언어. "pt", "en", "es"와 정확히 일치할 때만
    pub fn from_stored_code(code: &str) -> Option<Self> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code)
    }

    /// 로케일 태그 → 언어. 기본 언어 부분만 보며 알 수 없으면 Portuguese
    pub fn from_code(code: &str) -> Self {
        match primary_subtag(code).as_deref() {
            Some("en") => Language::English,
            Some("es") => Language::Spanish,
            _ => Language::Portuguese,
        }
    }

    /// 적용된 로케일로부터 언어 결정 (없으면 시스템 로케일)
    pub fn resolve(locale: Option<&str>) -> Self {
        match locale {
            Some(tag) if !tag.trim().is_empty() => Self::from_code(tag),
            _ => system_language()
                .map(|code| Self::from_code(&code))
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    AppName,
    MenuLanguages,
    LanguagePortuguese,
    LanguageEnglish,
    LanguageSpanish,
    Heading,
    Description,
    HintMenu,
    HintSelect,
    HintQuit,
    WarnTitle,
    WarnCurrent,
    WarnRequired,
    WarnHint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    LanguageSaved,
    SaveFailed,
    LocaleFailed,
}

#[derive(Debug, Clone, Copy)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn tr(self, key: TextKey) -> &'static str {
        match (self.language, key) {
            (_, TextKey::AppName) => "Idiomas",
            (Language::Portuguese, TextKey::MenuLanguages) => "Idiomas",
            (Language::English, TextKey::MenuLanguages) => "Languages",
            (Language::Spanish, TextKey::MenuLanguages) => "Idiomas",
            (Language::Portuguese, TextKey::LanguagePortuguese) => "Português",
            (Language::English, TextKey::LanguagePortuguese) => "Portuguese",
            (Language::Spanish, TextKey::LanguagePortuguese) => "Portugués",
            (Language::Portuguese, TextKey::LanguageEnglish) => "Inglês",
            (Language::English, TextKey::LanguageEnglish) => "English",
            (Language::Spanish, TextKey::LanguageEnglish) => "Inglés",
            (Language::Portuguese, TextKey::LanguageSpanish) => "Espanhol",
            (Language::English, TextKey::LanguageSpanish) => "Spanish",
            (Language::Spanish, TextKey::LanguageSpanish) => "Español",
            (Language::Portuguese, TextKey::Heading) => "Idioma",
            (Language::English, TextKey::Heading) => "Language",
            (Language::Spanish, TextKey::Heading) => "Idioma",
            (Language::Portuguese, TextKey::Description) => {
                "Escolha um idioma no menu. A escolha fica salva e é aplicada sempre que o aplicativo abrir."
            }
            (Language::English, TextKey::Description) => {
                "Pick a language from the menu. Your choice is saved and applied every time the app starts."
            }
            (Language::Spanish, TextKey::Description) => {
                "Elige un idioma en el menú. La elección se guarda y se aplica cada vez que se abre la aplicación."
            }
            (Language::Portuguese, TextKey::HintMenu) => "Menu",
            (Language::English, TextKey::HintMenu) => "Menu",
            (Language::Spanish, TextKey::HintMenu) => "Menú",
            (Language::Portuguese, TextKey::HintSelect) => "Escolher",
            (Language::English, TextKey::HintSelect) => "Pick",
            (Language::Spanish, TextKey::HintSelect) => "Elegir",
            (Language::Portuguese, TextKey::HintQuit) => "Sair",
            (Language::English, TextKey::HintQuit) => "Quit",
            (Language::Spanish, TextKey::HintQuit) => "Salir",
            (Language::Portuguese, TextKey::WarnTitle) => "Terminal muito pequeno",
            (Language::English, TextKey::WarnTitle) => "Terminal Too Small",
            (Language::Spanish, TextKey::WarnTitle) => "Terminal demasiado pequeño",
            (Language::Portuguese, TextKey::WarnCurrent) => "Atual: ",
            (Language::English, TextKey::WarnCurrent) => "Current: ",
            (Language::Spanish, TextKey::WarnCurrent) => "Actual: ",
            (Language::Portuguese, TextKey::WarnRequired) => "Necessário: ",
            (Language::English, TextKey::WarnRequired) => "Required: ",
            (Language::Spanish, TextKey::WarnRequired) => "Necesario: ",
            (Language::Portuguese, TextKey::WarnHint) => "Redimensione o terminal",
            (Language::English, TextKey::WarnHint) => "Please resize your terminal",
            (Language::Spanish, TextKey::WarnHint) => "Cambia el tamaño del terminal",
        }
    }

    pub fn msg(self, key: MessageKey) -> &'static str {
        match (self.language, key) {
            (Language::Portuguese, MessageKey::LanguageSaved) => "Idioma salvo",
            (Language::English, MessageKey::LanguageSaved) => "Language saved",
            (Language::Spanish, MessageKey::LanguageSaved) => "Idioma guardado",
            (Language::Portuguese, MessageKey::SaveFailed) => "Falha ao salvar o idioma",
            (Language::English, MessageKey::SaveFailed) => "Failed to save language",
            (Language::Spanish, MessageKey::SaveFailed) => "No se pudo guardar el idioma",
            (Language::Portuguese, MessageKey::LocaleFailed) => "Falha ao aplicar o idioma",
            (Language::English, MessageKey::LocaleFailed) => "Failed to apply language",
            (Language::Spanish, MessageKey::LocaleFailed) => "No se pudo aplicar el idioma",
        }
    }

    /// 메뉴 항목 레이블 (현재 언어로 표시한 대상 언어 이름)
    pub fn language_label(self, target: Language) -> &'static str {
        match target {
            Language::Portuguese => self.tr(TextKey::LanguagePortuguese),
            Language::English => self.tr(TextKey::LanguageEnglish),
            Language::Spanish => self.tr(TextKey::LanguageSpanish),
        }
    }
}
