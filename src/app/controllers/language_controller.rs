use super::super::*;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action.language() {
        Some(language) => {
            app.close_menu();
            app.select_language(language);
        }
        None => unreachable!("non-language action: {:?}", action),
    }
}
