use super::repository::HolidaysRepository;
use crate::api::{ApiClient, ApiError, Holiday, HolidayPayload};
use crate::components::messages::MessageState;
use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayModal {
    Create,
    Edit(i64),
}

#[derive(Clone, Copy)]
pub struct HolidaysViewModel {
    pub holidays: RwSignal<Vec<Holiday>>,
    pub modal: RwSignal<Option<HolidayModal>>,
    pub name: RwSignal<String>,
    pub date: RwSignal<String>,
    pub delete_target: RwSignal<Option<Holiday>>,
    pub message: RwSignal<MessageState>,
    pub save_action: Action<(Option<i64>, HolidayPayload), Result<HolidaySaved, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    loader: Resource<(), Result<Vec<Holiday>, ApiError>>,
}

/// Confirmed outcome of a save. Update confirmations carry no body, so
/// the action threads the dispatched payload through; reconciliation
/// must never read the live form, which may have changed while the
/// request was in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidaySaved {
    Created(Holiday),
    Updated { id: i64, payload: HolidayPayload },
}

/// Form fields are kept as entered; parsing happens once at submit.
pub fn parse_form(name: &str, date: &str) -> Result<HolidayPayload, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("Le nom du jour férié est obligatoire."));
    }
    let holiday_date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation("La date est obligatoire."))?;
    Ok(HolidayPayload {
        holiday_date,
        holiday_name: name.to_string(),
    })
}

pub fn apply_saved(holidays: &mut Vec<Holiday>, saved: &HolidaySaved) {
    match saved {
        HolidaySaved::Created(holiday) => holidays.push(holiday.clone()),
        HolidaySaved::Updated { id, payload } => {
            if let Some(slot) = holidays.iter_mut().find(|h| h.id == *id) {
                slot.holiday_name = payload.holiday_name.clone();
                slot.holiday_date = payload.holiday_date;
            }
        }
    }
}

pub fn apply_deleted(holidays: &mut Vec<Holiday>, id: i64) {
    holidays.retain(|h| h.id != id);
}

pub fn use_holidays_view_model() -> HolidaysViewModel {
    let client = Rc::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let repo = HolidaysRepository::new_with_client(client);

    // the list is reconciled locally after each confirmed mutation,
    // so it is fetched exactly once
    let loader = create_local_resource(|| (), {
        let repo = repo.clone();
        move |_| {
            let repo = repo.clone();
            async move { repo.list().await }
        }
    });

    let holidays = create_rw_signal(Vec::<Holiday>::new());
    let modal = create_rw_signal(None::<HolidayModal>);
    let name = create_rw_signal(String::new());
    let date = create_rw_signal(String::new());
    let delete_target = create_rw_signal(None::<Holiday>);
    let message = create_rw_signal(MessageState::default());

    let save_action = create_action({
        let repo = repo.clone();
        move |input: &(Option<i64>, HolidayPayload)| {
            let repo = repo.clone();
            let (id, payload) = input.clone();
            async move {
                match id {
                    Some(id) => {
                        repo.update(id, &payload).await?;
                        Ok(HolidaySaved::Updated { id, payload })
                    }
                    None => repo.create(&payload).await.map(HolidaySaved::Created),
                }
            }
        }
    });

    let delete_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.delete(id).await }
    });

    create_effect(move |_| {
        if let Some(Ok(list)) = loader.get() {
            holidays.set(list);
        }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(saved) => {
                    let created = matches!(saved, HolidaySaved::Created(_));
                    holidays.update(|list| apply_saved(list, &saved));
                    message.update(|m| {
                        m.set_success(if created {
                            "Jour férié ajouté."
                        } else {
                            "Jour férié mis à jour."
                        })
                    });
                    modal.set(None);
                }
                Err(err) => message.update(|m| m.set_error(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    if let Some(holiday) = delete_target.get_untracked() {
                        holidays.update(|list| apply_deleted(list, holiday.id));
                    }
                    message.update(|m| m.set_success("Jour férié supprimé."));
                }
                Err(err) => message.update(|m| m.set_error(err)),
            }
            delete_target.set(None);
        }
    });

    HolidaysViewModel {
        holidays,
        modal,
        name,
        date,
        delete_target,
        message,
        save_action,
        delete_action,
        loader,
    }
}

impl HolidaysViewModel {
    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let loader = self.loader;
        Signal::derive(move || loader.get().and_then(Result::err))
    }

    pub fn loading(&self) -> Signal<bool> {
        let loader = self.loader;
        Signal::derive(move || loader.loading().get())
    }

    pub fn busy(&self) -> Signal<bool> {
        let save = self.save_action.pending();
        let delete = self.delete_action.pending();
        Signal::derive(move || save.get() || delete.get())
    }

    fn is_busy(&self) -> bool {
        self.save_action.pending().get_untracked()
            || self.delete_action.pending().get_untracked()
    }

    pub fn open_create(&self) {
        self.name.set(String::new());
        self.date.set(String::new());
        self.modal.set(Some(HolidayModal::Create));
    }

    pub fn open_edit(&self, holiday: &Holiday) {
        self.name.set(holiday.holiday_name.clone());
        self.date.set(holiday.holiday_date.format("%Y-%m-%d").to_string());
        self.modal.set(Some(HolidayModal::Edit(holiday.id)));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    pub fn submit(&self) {
        if self.is_busy() {
            return;
        }
        let Some(modal) = self.modal.get_untracked() else {
            return;
        };
        let payload = match parse_form(&self.name.get_untracked(), &self.date.get_untracked()) {
            Ok(payload) => payload,
            Err(err) => {
                self.message.update(|m| m.set_error(err));
                return;
            }
        };
        let id = match modal {
            HolidayModal::Create => None,
            HolidayModal::Edit(id) => Some(id),
        };
        self.save_action.dispatch((id, payload));
    }

    pub fn request_delete(&self, holiday: Holiday) {
        self.delete_target.set(Some(holiday));
    }

    pub fn cancel_delete(&self) {
        self.delete_target.set(None);
    }

    pub fn confirm_delete(&self) {
        if self.is_busy() {
            return;
        }
        if let Some(holiday) = self.delete_target.get_untracked() {
            self.delete_action.dispatch(holiday.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::date;

    #[test]
    fn parse_form_requires_name_and_a_well_formed_date() {
        assert!(parse_form("", "2024-01-01").is_err());
        assert!(parse_form("Nouvel an", "").is_err());
        assert!(parse_form("Nouvel an", "01/01/2024").is_err());

        let payload = parse_form(" Nouvel an ", "2024-01-01").unwrap();
        assert_eq!(payload.holiday_name, "Nouvel an");
        assert_eq!(payload.holiday_date, date(2024, 1, 1));
    }

    #[test]
    fn update_reconciles_from_the_dispatched_payload_only() {
        let mut holidays = vec![Holiday {
            id: 1,
            holiday_date: date(2024, 1, 1),
            holiday_name: "Nouvel an".into(),
        }];
        let payload = parse_form("Fête du travail", "2024-05-01").unwrap();
        apply_saved(
            &mut holidays,
            &HolidaySaved::Updated { id: 1, payload },
        );
        assert_eq!(holidays[0].holiday_name, "Fête du travail");
        assert_eq!(holidays[0].holiday_date, date(2024, 5, 1));
    }

    #[test]
    fn create_appends_the_confirmed_holiday() {
        let mut holidays = Vec::new();
        let holiday = Holiday {
            id: 7,
            holiday_date: date(2024, 3, 20),
            holiday_name: "Indépendance".into(),
        };
        apply_saved(&mut holidays, &HolidaySaved::Created(holiday.clone()));
        assert_eq!(holidays, vec![holiday]);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::date;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn incomplete_form_is_stopped_before_any_request() {
        with_runtime(|| {
            let vm = use_holidays_view_model();
            vm.open_create();
            vm.name.set("Nouvel an".into());
            vm.submit();
            let error = vm.message.get().error.unwrap();
            assert_eq!(error.error, "La date est obligatoire.");
            assert!(vm.save_action.value().get().is_none());
        });
    }

    #[test]
    fn edit_prefills_name_and_date() {
        with_runtime(|| {
            let vm = use_holidays_view_model();
            vm.open_edit(&Holiday {
                id: 5,
                holiday_date: date(2024, 3, 20),
                holiday_name: "Indépendance".into(),
            });
            assert_eq!(vm.modal.get(), Some(HolidayModal::Edit(5)));
            assert_eq!(vm.date.get(), "2024-03-20");
        });
    }
}
