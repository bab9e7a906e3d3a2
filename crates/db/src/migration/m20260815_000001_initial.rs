//! Initial schema: customers, the customer ledger log, and sales
//! documents.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r"
DROP TABLE IF EXISTS sales_documents CASCADE;
DROP TABLE IF EXISTS customer_ledger_entries CASCADE;
DROP TABLE IF EXISTS customers CASCADE;
DROP TYPE IF EXISTS document_status;
DROP TYPE IF EXISTS document_type;
DROP TYPE IF EXISTS opening_balance_type;
",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
CREATE TYPE opening_balance_type AS ENUM ('debit', 'credit');
CREATE TYPE document_type AS ENUM ('invoice', 'quote', 'credit_note');
CREATE TYPE document_status AS ENUM (
    'draft', 'issued', 'partially_paid', 'paid', 'cancelled', 'void'
);

-- Customer master. company_id scopes every row to a tenant.
CREATE TABLE customers (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    company_id UUID NOT NULL,
    name VARCHAR(255) NOT NULL,
    gstin VARCHAR(15),
    opening_balance NUMERIC(15, 2) NOT NULL DEFAULT 0,
    opening_balance_type opening_balance_type NOT NULL DEFAULT 'debit',
    credit_limit NUMERIC(15, 2) NOT NULL DEFAULT 0,
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_opening_balance_nonneg CHECK (opening_balance >= 0),
    CONSTRAINT chk_credit_limit_nonneg CHECK (credit_limit >= 0)
);

CREATE INDEX idx_customers_company ON customers(company_id) WHERE is_active;

-- Append-only ledger log. balance is the running balance after the
-- entry; rows are never updated, only compensated.
CREATE TABLE customer_ledger_entries (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    customer_id UUID NOT NULL REFERENCES customers(id) ON DELETE CASCADE,
    company_id UUID NOT NULL,
    entry_date DATE NOT NULL,
    description TEXT,
    debit_amount NUMERIC(15, 2) NOT NULL DEFAULT 0,
    credit_amount NUMERIC(15, 2) NOT NULL DEFAULT 0,
    balance NUMERIC(15, 2) NOT NULL,
    reference_type VARCHAR(32),
    reference_id UUID,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_debit_nonneg CHECK (debit_amount >= 0),
    CONSTRAINT chk_credit_nonneg CHECK (credit_amount >= 0)
);

-- Backs the latest-entry query: one index probe, LIMIT 1.
CREATE INDEX idx_ledger_entries_latest
    ON customer_ledger_entries(customer_id, company_id, entry_date DESC, created_at DESC);

-- Sales documents. Invoices, quotes and credit notes share the table;
-- only document_type = 'invoice' rows feed the balance engine.
CREATE TABLE sales_documents (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    customer_id UUID NOT NULL REFERENCES customers(id) ON DELETE CASCADE,
    company_id UUID NOT NULL,
    document_type document_type NOT NULL,
    status document_status NOT NULL DEFAULT 'draft',
    document_number VARCHAR(64) NOT NULL,
    document_date DATE NOT NULL,
    total_amount NUMERIC(15, 2) NOT NULL DEFAULT 0,
    paid_amount NUMERIC(15, 2) NOT NULL DEFAULT 0,
    balance_amount NUMERIC(15, 2),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_document_number UNIQUE (company_id, document_number),
    CONSTRAINT chk_total_nonneg CHECK (total_amount >= 0),
    CONSTRAINT chk_paid_nonneg CHECK (paid_amount >= 0)
);

-- Backs the fallback aggregation scan.
CREATE INDEX idx_sales_documents_customer
    ON sales_documents(customer_id, company_id, document_type, status);
";
