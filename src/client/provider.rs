use reqwest::Method;

use crate::models::*;
use super::{found, ClientError, ClinicApiClient};

/// Provider-facing endpoints. Every path is scoped to the signed-in provider.
impl ClinicApiClient {
    pub async fn register_provider(&self, body: &ProviderRegistration) -> Result<Provider, ClientError> {
        self.execute(self.request(Method::POST, "/provider/register").json(body))
            .await
    }

    pub async fn provider_login(&self, body: &ProviderCredentials) -> Result<Provider, ClientError> {
        self.execute(self.request(Method::POST, "/provider/login").json(body))
            .await
    }

    pub async fn provider_profile(&self, provider_id: i64) -> Result<Provider, ClientError> {
        self.execute(self.request(Method::GET, &format!("/provider/{provider_id}/profile")))
            .await
    }

    pub async fn list_provider_sessions(
        &self,
        provider_id: i64,
        query: &ProviderSessionQuery,
    ) -> Result<Vec<ClinicSession>, ClientError> {
        self.execute(
            self.request(Method::GET, &format!("/provider/{provider_id}/sessions"))
                .query(query),
        )
        .await
    }

    pub async fn create_session(
        &self,
        provider_id: i64,
        body: &SessionSchedule,
    ) -> Result<ClinicSession, ClientError> {
        self.execute(
            self.request(Method::POST, &format!("/provider/{provider_id}/sessions"))
                .json(body),
        )
        .await
    }

    pub async fn update_session(
        &self,
        provider_id: i64,
        session_id: i64,
        body: &SessionSchedule,
    ) -> Result<ClinicSession, ClientError> {
        self.execute(
            self.request(Method::PUT, &format!("/provider/{provider_id}/sessions/{session_id}"))
                .json(body),
        )
        .await
    }

    pub async fn cancel_session(
        &self,
        provider_id: i64,
        session_id: i64,
    ) -> Result<Acknowledgement, ClientError> {
        self.execute(self.request(
            Method::POST,
            &format!("/provider/{provider_id}/sessions/{session_id}/cancel"),
        ))
        .await
    }

    pub async fn list_session_appointments(
        &self,
        provider_id: i64,
        session_id: i64,
    ) -> Result<Vec<Appointment>, ClientError> {
        self.execute(self.request(
            Method::GET,
            &format!("/provider/{provider_id}/sessions/{session_id}/appointments"),
        ))
        .await
    }

    /// `None` until the provider first saves notes for the appointment.
    pub async fn encounter_for_appointment(
        &self,
        provider_id: i64,
        appt_id: i64,
    ) -> Result<Option<Encounter>, ClientError> {
        let result: Result<Option<Encounter>, ClientError> = self
            .execute(self.request(
                Method::GET,
                &format!("/provider/{provider_id}/appointments/{appt_id}/encounter"),
            ))
            .await;
        found(result).map(Option::flatten)
    }

    /// Takes the edit lock so a second device cannot write concurrently.
    pub async fn lock_encounter(
        &self,
        provider_id: i64,
        appt_id: i64,
    ) -> Result<Acknowledgement, ClientError> {
        self.execute(self.request(
            Method::POST,
            &format!("/provider/{provider_id}/appointments/{appt_id}/encounter/lock"),
        ))
        .await
    }

    pub async fn unlock_encounter(
        &self,
        provider_id: i64,
        appt_id: i64,
    ) -> Result<Acknowledgement, ClientError> {
        self.execute(self.request(
            Method::POST,
            &format!("/provider/{provider_id}/appointments/{appt_id}/encounter/unlock"),
        ))
        .await
    }

    pub async fn upsert_encounter(
        &self,
        provider_id: i64,
        appt_id: i64,
        body: &EncounterUpsert,
    ) -> Result<Encounter, ClientError> {
        self.execute(
            self.request(
                Method::PUT,
                &format!("/provider/{provider_id}/appointments/{appt_id}/encounter"),
            )
            .json(body),
        )
        .await
    }

    pub async fn list_diagnoses(
        &self,
        provider_id: i64,
        enct_id: i64,
    ) -> Result<Vec<Diagnosis>, ClientError> {
        self.execute(self.request(
            Method::GET,
            &format!("/provider/{provider_id}/encounters/{enct_id}/diagnoses"),
        ))
        .await
    }

    /// Returns the encounter's full diagnosis list after the write.
    pub async fn upsert_diagnosis(
        &self,
        provider_id: i64,
        enct_id: i64,
        code_icd: &str,
        is_primary: bool,
    ) -> Result<Vec<Diagnosis>, ClientError> {
        self.execute(
            self.request(
                Method::PUT,
                &format!("/provider/{provider_id}/encounters/{enct_id}/diagnoses/{code_icd}"),
            )
            .json(&DiagnosisUpsert { is_primary }),
        )
        .await
    }

    pub async fn set_primary_diagnosis(
        &self,
        provider_id: i64,
        enct_id: i64,
        code_icd: &str,
    ) -> Result<Vec<Diagnosis>, ClientError> {
        self.execute(
            self.request(
                Method::POST,
                &format!("/provider/{provider_id}/encounters/{enct_id}/primary-diagnosis"),
            )
            .json(&PrimaryDiagnosis {
                code_icd: code_icd.to_string(),
            }),
        )
        .await
    }

    pub async fn prescription(
        &self,
        provider_id: i64,
        enct_id: i64,
    ) -> Result<Option<Prescription>, ClientError> {
        let result: Result<Option<Prescription>, ClientError> = self
            .execute(self.request(
                Method::GET,
                &format!("/provider/{provider_id}/encounters/{enct_id}/prescription"),
            ))
            .await;
        found(result).map(Option::flatten)
    }

    /// Saves the prescription as a draft.
    pub async fn upsert_prescription(
        &self,
        provider_id: i64,
        enct_id: i64,
        body: &PrescriptionUpsert,
    ) -> Result<Option<Prescription>, ClientError> {
        self.execute(
            self.request(
                Method::PUT,
                &format!("/provider/{provider_id}/encounters/{enct_id}/prescription"),
            )
            .json(body),
        )
        .await
    }

    /// Issues the prescription; it can no longer be edited afterwards.
    pub async fn finalize_prescription(
        &self,
        provider_id: i64,
        enct_id: i64,
        body: &PrescriptionUpsert,
    ) -> Result<Option<Prescription>, ClientError> {
        self.execute(
            self.request(
                Method::POST,
                &format!("/provider/{provider_id}/encounters/{enct_id}/prescription/finalize"),
            )
            .json(body),
        )
        .await
    }

    pub async fn list_lab_results(
        &self,
        provider_id: i64,
        enct_id: i64,
    ) -> Result<Vec<LabResult>, ClientError> {
        self.execute(self.request(
            Method::GET,
            &format!("/provider/{provider_id}/encounters/{enct_id}/lab-results"),
        ))
        .await
    }

    pub async fn add_lab_result(
        &self,
        provider_id: i64,
        enct_id: i64,
        body: &NewLabResult,
    ) -> Result<LabResult, ClientError> {
        self.execute(
            self.request(
                Method::POST,
                &format!("/provider/{provider_id}/encounters/{enct_id}/lab-results"),
            )
            .json(body),
        )
        .await
    }

    pub async fn payment(
        &self,
        provider_id: i64,
        enct_id: i64,
    ) -> Result<Option<Payment>, ClientError> {
        let result: Result<Option<Payment>, ClientError> = self
            .execute(self.request(
                Method::GET,
                &format!("/provider/{provider_id}/encounters/{enct_id}/payment"),
            ))
            .await;
        found(result).map(Option::flatten)
    }

    pub async fn upsert_payment(
        &self,
        provider_id: i64,
        enct_id: i64,
        body: &PaymentUpsert,
    ) -> Result<Payment, ClientError> {
        self.execute(
            self.request(
                Method::POST,
                &format!("/provider/{provider_id}/encounters/{enct_id}/payment"),
            )
            .json(body),
        )
        .await
    }

    pub async fn search_diseases(&self, query: Option<&str>) -> Result<Vec<DiseaseOption>, ClientError> {
        self.execute(
            self.request(Method::GET, "/provider/diseases")
                .query(&CatalogQuery::new(query)),
        )
        .await
    }

    pub async fn search_medications(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<MedicationOption>, ClientError> {
        self.execute(
            self.request(Method::GET, "/provider/medications")
                .query(&CatalogQuery::new(query)),
        )
        .await
    }

    pub async fn appointment_patient_id(
        &self,
        provider_id: i64,
        appt_id: i64,
    ) -> Result<i64, ClientError> {
        let found: AppointmentPatient = self
            .execute(self.request(
                Method::GET,
                &format!("/provider/{provider_id}/appointments/{appt_id}/patient-id"),
            ))
            .await?;
        Ok(found.patient_id)
    }

    /// A patient's past encounters, diagnoses and lab reports as seen by a
    /// provider. Prescriptions and payments are not included.
    pub async fn provider_patient_history(
        &self,
        provider_id: i64,
        patient_id: i64,
    ) -> Result<PatientHistory, ClientError> {
        self.execute(self.request(
            Method::GET,
            &format!("/provider/{provider_id}/patients/{patient_id}/history"),
        ))
        .await
    }
}
