mod dry_run_writes_nothing_contract;
mod generates_workflow_contract;
mod rejects_empty_prompt_contract;
