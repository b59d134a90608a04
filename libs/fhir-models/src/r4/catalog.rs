//! Every shape in the crate, in module order. Backs [`crate::shape::registry`].

use crate::r4::*;
use crate::shape::ShapeInfo;

pub(crate) static SHAPES: &[ShapeInfo] = &[
    // claim
    ShapeInfo::of::<Claim>(),
    ShapeInfo::of::<ClaimAccident>(),
    ShapeInfo::of::<ClaimCareTeam>(),
    ShapeInfo::of::<ClaimDiagnosis>(),
    ShapeInfo::of::<ClaimInsurance>(),
    ShapeInfo::of::<ClaimItem>(),
    ShapeInfo::of::<ClaimItemDetail>(),
    ShapeInfo::of::<ClaimItemDetailSubDetail>(),
    ShapeInfo::of::<ClaimPayee>(),
    ShapeInfo::of::<ClaimProcedure>(),
    ShapeInfo::of::<ClaimRelated>(),
    ShapeInfo::of::<ClaimSupportingInfo>(),
    // claim_response
    ShapeInfo::of::<ClaimResponse>(),
    ShapeInfo::of::<ClaimResponseAddItem>(),
    ShapeInfo::of::<ClaimResponseAddItemDetail>(),
    ShapeInfo::of::<ClaimResponseAddItemDetailSubDetail>(),
    ShapeInfo::of::<ClaimResponseError>(),
    ShapeInfo::of::<ClaimResponseInsurance>(),
    ShapeInfo::of::<ClaimResponseItem>(),
    ShapeInfo::of::<ClaimResponseItemAdjudication>(),
    ShapeInfo::of::<ClaimResponseItemDetail>(),
    ShapeInfo::of::<ClaimResponseItemDetailSubDetail>(),
    ShapeInfo::of::<ClaimResponsePayment>(),
    ShapeInfo::of::<ClaimResponseProcessNote>(),
    ShapeInfo::of::<ClaimResponseTotal>(),
    // code_system
    ShapeInfo::of::<CodeSystem>(),
    ShapeInfo::of::<CodeSystemConcept>(),
    ShapeInfo::of::<CodeSystemConceptDesignation>(),
    ShapeInfo::of::<CodeSystemConceptProperty>(),
    ShapeInfo::of::<CodeSystemFilter>(),
    ShapeInfo::of::<CodeSystemProperty>(),
    // encounter
    ShapeInfo::of::<Encounter>(),
    ShapeInfo::of::<EncounterClassHistory>(),
    ShapeInfo::of::<EncounterDiagnosis>(),
    ShapeInfo::of::<EncounterHospitalization>(),
    ShapeInfo::of::<EncounterLocation>(),
    ShapeInfo::of::<EncounterParticipant>(),
    ShapeInfo::of::<EncounterStatusHistory>(),
    // explanation_of_benefit
    ShapeInfo::of::<ExplanationOfBenefit>(),
    ShapeInfo::of::<ExplanationOfBenefitAccident>(),
    ShapeInfo::of::<ExplanationOfBenefitAddItem>(),
    ShapeInfo::of::<ExplanationOfBenefitAddItemDetail>(),
    ShapeInfo::of::<ExplanationOfBenefitAddItemDetailSubDetail>(),
    ShapeInfo::of::<ExplanationOfBenefitBenefitBalance>(),
    ShapeInfo::of::<ExplanationOfBenefitBenefitBalanceFinancial>(),
    ShapeInfo::of::<ExplanationOfBenefitCareTeam>(),
    ShapeInfo::of::<ExplanationOfBenefitDiagnosis>(),
    ShapeInfo::of::<ExplanationOfBenefitInsurance>(),
    ShapeInfo::of::<ExplanationOfBenefitItem>(),
    ShapeInfo::of::<ExplanationOfBenefitItemAdjudication>(),
    ShapeInfo::of::<ExplanationOfBenefitItemDetail>(),
    ShapeInfo::of::<ExplanationOfBenefitItemDetailSubDetail>(),
    ShapeInfo::of::<ExplanationOfBenefitPayee>(),
    ShapeInfo::of::<ExplanationOfBenefitPayment>(),
    ShapeInfo::of::<ExplanationOfBenefitProcedure>(),
    ShapeInfo::of::<ExplanationOfBenefitProcessNote>(),
    ShapeInfo::of::<ExplanationOfBenefitRelated>(),
    ShapeInfo::of::<ExplanationOfBenefitSupportingInfo>(),
    ShapeInfo::of::<ExplanationOfBenefitTotal>(),
    // medication_knowledge
    ShapeInfo::of::<MedicationKnowledge>(),
    ShapeInfo::of::<MedicationKnowledgeAdministrationGuidelines>(),
    ShapeInfo::of::<MedicationKnowledgeAdministrationGuidelinesDosage>(),
    ShapeInfo::of::<MedicationKnowledgeAdministrationGuidelinesPatientCharacteristics>(),
    ShapeInfo::of::<MedicationKnowledgeCost>(),
    ShapeInfo::of::<MedicationKnowledgeDrugCharacteristic>(),
    ShapeInfo::of::<MedicationKnowledgeIngredient>(),
    ShapeInfo::of::<MedicationKnowledgeKinetics>(),
    ShapeInfo::of::<MedicationKnowledgeMedicineClassification>(),
    ShapeInfo::of::<MedicationKnowledgeMonitoringProgram>(),
    ShapeInfo::of::<MedicationKnowledgeMonograph>(),
    ShapeInfo::of::<MedicationKnowledgePackaging>(),
    ShapeInfo::of::<MedicationKnowledgeRegulatory>(),
    ShapeInfo::of::<MedicationKnowledgeRegulatoryMaxDispense>(),
    ShapeInfo::of::<MedicationKnowledgeRegulatorySchedule>(),
    ShapeInfo::of::<MedicationKnowledgeRegulatorySubstitution>(),
    ShapeInfo::of::<MedicationKnowledgeRelatedMedicationKnowledge>(),
    // molecular_sequence
    ShapeInfo::of::<MolecularSequence>(),
    ShapeInfo::of::<MolecularSequenceQuality>(),
    ShapeInfo::of::<MolecularSequenceQualityRoc>(),
    ShapeInfo::of::<MolecularSequenceReferenceSeq>(),
    ShapeInfo::of::<MolecularSequenceRepository>(),
    ShapeInfo::of::<MolecularSequenceStructureVariant>(),
    ShapeInfo::of::<MolecularSequenceStructureVariantInner>(),
    ShapeInfo::of::<MolecularSequenceStructureVariantOuter>(),
    ShapeInfo::of::<MolecularSequenceVariant>(),
    // plan_definition
    ShapeInfo::of::<PlanDefinition>(),
    ShapeInfo::of::<PlanDefinitionAction>(),
    ShapeInfo::of::<PlanDefinitionActionCondition>(),
    ShapeInfo::of::<PlanDefinitionActionDynamicValue>(),
    ShapeInfo::of::<PlanDefinitionActionParticipant>(),
    ShapeInfo::of::<PlanDefinitionActionRelatedAction>(),
    ShapeInfo::of::<PlanDefinitionGoal>(),
    ShapeInfo::of::<PlanDefinitionGoalTarget>(),
    // questionnaire
    ShapeInfo::of::<Questionnaire>(),
    ShapeInfo::of::<QuestionnaireItem>(),
    ShapeInfo::of::<QuestionnaireItemAnswerOption>(),
    ShapeInfo::of::<QuestionnaireItemEnableWhen>(),
    ShapeInfo::of::<QuestionnaireItemInitial>(),
    // structure_map
    ShapeInfo::of::<StructureMap>(),
    ShapeInfo::of::<StructureMapGroup>(),
    ShapeInfo::of::<StructureMapGroupInput>(),
    ShapeInfo::of::<StructureMapGroupRule>(),
    ShapeInfo::of::<StructureMapGroupRuleDependent>(),
    ShapeInfo::of::<StructureMapGroupRuleSource>(),
    ShapeInfo::of::<StructureMapGroupRuleTarget>(),
    ShapeInfo::of::<StructureMapGroupRuleTargetParameter>(),
    ShapeInfo::of::<StructureMapStructure>(),
    // task
    ShapeInfo::of::<Task>(),
    ShapeInfo::of::<TaskInput>(),
    ShapeInfo::of::<TaskOutput>(),
    ShapeInfo::of::<TaskRestriction>(),
    // test_script
    ShapeInfo::of::<TestScript>(),
    ShapeInfo::of::<TestScriptDestination>(),
    ShapeInfo::of::<TestScriptFixture>(),
    ShapeInfo::of::<TestScriptMetadata>(),
    ShapeInfo::of::<TestScriptMetadataCapability>(),
    ShapeInfo::of::<TestScriptMetadataLink>(),
    ShapeInfo::of::<TestScriptOrigin>(),
    ShapeInfo::of::<TestScriptSetup>(),
    ShapeInfo::of::<TestScriptSetupAction>(),
    ShapeInfo::of::<TestScriptSetupActionAssert>(),
    ShapeInfo::of::<TestScriptSetupActionOperation>(),
    ShapeInfo::of::<TestScriptSetupActionOperationRequestHeader>(),
    ShapeInfo::of::<TestScriptTeardown>(),
    ShapeInfo::of::<TestScriptTeardownAction>(),
    ShapeInfo::of::<TestScriptTest>(),
    ShapeInfo::of::<TestScriptTestAction>(),
    ShapeInfo::of::<TestScriptVariable>(),
    // value_set
    ShapeInfo::of::<ValueSet>(),
    ShapeInfo::of::<ValueSetCompose>(),
    ShapeInfo::of::<ValueSetComposeInclude>(),
    ShapeInfo::of::<ValueSetComposeIncludeConcept>(),
    ShapeInfo::of::<ValueSetComposeIncludeConceptDesignation>(),
    ShapeInfo::of::<ValueSetComposeIncludeFilter>(),
    ShapeInfo::of::<ValueSetExpansion>(),
    ShapeInfo::of::<ValueSetExpansionContains>(),
    ShapeInfo::of::<ValueSetExpansionParameter>(),
    // special
    ShapeInfo::of::<Extension>(),
    ShapeInfo::of::<Reference>(),
    ShapeInfo::of::<Dosage>(),
    ShapeInfo::of::<DosageDoseAndRate>(),
    ShapeInfo::of::<Meta>(),
    ShapeInfo::of::<Narrative>(),
    // general
    ShapeInfo::of::<Coding>(),
    ShapeInfo::of::<CodeableConcept>(),
    ShapeInfo::of::<Identifier>(),
    ShapeInfo::of::<Period>(),
    ShapeInfo::of::<Quantity>(),
    ShapeInfo::of::<Age>(),
    ShapeInfo::of::<Count>(),
    ShapeInfo::of::<Distance>(),
    ShapeInfo::of::<Duration>(),
    ShapeInfo::of::<Money>(),
    ShapeInfo::of::<Range>(),
    ShapeInfo::of::<Ratio>(),
    ShapeInfo::of::<Attachment>(),
    ShapeInfo::of::<Address>(),
    ShapeInfo::of::<ContactPoint>(),
    ShapeInfo::of::<HumanName>(),
    ShapeInfo::of::<Annotation>(),
    ShapeInfo::of::<SampledData>(),
    ShapeInfo::of::<Signature>(),
    ShapeInfo::of::<Timing>(),
    ShapeInfo::of::<TimingRepeat>(),
    // metadata
    ShapeInfo::of::<ContactDetail>(),
    ShapeInfo::of::<Contributor>(),
    ShapeInfo::of::<DataRequirement>(),
    ShapeInfo::of::<DataRequirementCodeFilter>(),
    ShapeInfo::of::<DataRequirementDateFilter>(),
    ShapeInfo::of::<DataRequirementSort>(),
    ShapeInfo::of::<Expression>(),
    ShapeInfo::of::<ParameterDefinition>(),
    ShapeInfo::of::<RelatedArtifact>(),
    ShapeInfo::of::<TriggerDefinition>(),
    ShapeInfo::of::<UsageContext>(),
    // organization
    ShapeInfo::of::<Organization>(),
    ShapeInfo::of::<OrganizationContact>(),
    // bundle
    ShapeInfo::of::<Bundle>(),
    ShapeInfo::of::<BundleLink>(),
    ShapeInfo::of::<BundleEntry>(),
    ShapeInfo::of::<BundleEntrySearch>(),
    ShapeInfo::of::<BundleEntryRequest>(),
    ShapeInfo::of::<BundleEntryResponse>(),
];
